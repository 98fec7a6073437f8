//! Crate-level error type
//!
//! Errors only exist at the input boundary (catalog JSON, theme TOML). The
//! render core itself degrades instead of failing, so nothing downstream of
//! loading returns a `Result`.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::theme::ThemeError;

/// Errors that can occur preparing inputs for a render
#[derive(Debug, Error)]
pub enum MapError {
    /// Error loading stations or a route result
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error loading a theme
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),
}
