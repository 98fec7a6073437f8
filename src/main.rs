//! Metromap CLI
//!
//! Usage:
//!   metromap [OPTIONS] [STATIONS]
//!
//! Reads a station catalog (JSON array) from a file or stdin, optionally a
//! route result (JSON) and a theme (TOML), and writes the rendered SVG map
//! to stdout.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use metromap::{
    catalog, render_svg_with_config, LayoutConfig, RenderConfig, SvgConfig, Theme, UiPreferences,
};

#[derive(Parser)]
#[command(name = "metromap")]
#[command(about = "Schematic transit map renderer")]
struct Cli {
    /// Station catalog JSON file (reads from stdin if not provided)
    stations: Option<PathBuf>,

    /// Route result JSON file to highlight on the map
    #[arg(short, long)]
    route: Option<PathBuf>,

    /// Theme file for the color palette (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Canvas zoom factor
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Render with high-contrast colors
    #[arg(long)]
    high_contrast: bool,

    /// Render with larger station labels
    #[arg(long)]
    large_labels: bool,

    /// Emit compact SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Debug mode: dump the computed layout to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.stations.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let stations = match &cli.stations {
        Some(path) => match catalog::stations_from_file(path) {
            Ok(stations) => stations,
            Err(e) => {
                eprintln!("Error reading stations '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match catalog::stations_from_str(&buffer) {
                Ok(stations) => stations,
                Err(e) => {
                    eprintln!("Error parsing stations from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let route = match &cli.route {
        Some(path) => match catalog::route_from_file(path) {
            Ok(route) => Some(route),
            Err(e) => {
                eprintln!("Error reading route '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let prefs = UiPreferences::new()
        .with_high_contrast(cli.high_contrast)
        .with_large_labels(cli.large_labels)
        .with_scale(cli.scale.clamp(0.8, 1.4));

    let config = RenderConfig::new()
        .with_layout(LayoutConfig::default())
        .with_svg(SvgConfig::default().with_pretty_print(!cli.compact))
        .with_theme(theme)
        .with_debug(cli.debug);

    let svg = render_svg_with_config(&stations, route.as_ref(), &prefs, &config);
    println!("{}", svg);
}

fn print_intro() {
    println!(
        r##"Metromap - schematic transit map renderer

USAGE:
    metromap [OPTIONS] [STATIONS]
    cat stations.json | metromap

OPTIONS:
    -r, --route <FILE>   Route result JSON to highlight
    -t, --theme <FILE>   Custom color palette (TOML file)
    --scale <FACTOR>     Canvas zoom (0.8 to 1.4)
    --high-contrast      High-contrast colors
    --large-labels       Larger station labels
    --compact            Compact SVG output
    -d, --debug          Dump computed layout to stderr
    -h, --help           Print help

QUICK START:
    metromap stations.json --route route.json > map.svg

STATIONS is a JSON array of
    {{"id": "A1", "name": "Centro", "line": "1", "x": 10, "y": 10, "color": "#3b82f6"}}
records; coordinates are normalized to a 0-100 plane."##
    );
}
