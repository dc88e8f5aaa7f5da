//! maptimeline CLI - render a location-history export as SVG or GeoJSON
//!
//! Usage:
//!   maptimeline <input_file> <output_file> [--geojson] [-w <width>] [-s <scale>] [-c <lat,lon,height,width>]
//!
//! Example:
//!   maptimeline 'Location History.json' timeline.svg
//!   maptimeline 'Location History.json' paris.svg -c 48.86,2.34,0.05,0.06

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use maptimeline::{CanvasOverride, OutputFormat, RenderConfig, convert_file};

#[derive(Parser)]
#[command(name = "maptimeline")]
#[command(
    about = "Converts location-history data to GeoJSON or SVG so that you can view your entire timeline on one map.",
    long_about = None
)]
struct Cli {
    /// The input JSON location-history file
    input_file: PathBuf,

    /// The output file to write the result to
    output_file: PathBuf,

    /// Output GeoJSON for use with mapping applications (default is SVG)
    #[arg(long)]
    geojson: bool,

    /// Width of the lines. Applies only to SVG output
    #[arg(short = 'w', long, default_value_t = 0.5)]
    stroke_width: f64,

    /// Scale of the canvas. Applies only to SVG output
    #[arg(short, long, default_value_t = 100.0)]
    scale: f64,

    /// lat,lon,height,width - center the SVG viewBox on (lat,lon) with the given size in degrees
    #[arg(short, long, value_parser = parse_canvas, allow_hyphen_values = true)]
    canvas: Option<CanvasOverride>,

    /// Directory that input and output paths are relative to
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_canvas(value: &str) -> Result<CanvasOverride, String> {
    value.parse().map_err(|e: maptimeline::TimelineError| e.to_string())
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            format: if self.geojson {
                OutputFormat::GeoJson
            } else {
                OutputFormat::Svg
            },
            stroke_width: self.stroke_width,
            scale: self.scale,
            canvas: self.canvas,
            base_dir: self.base_dir.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let config = cli.render_config();
    match convert_file(&cli.input_file, &cli.output_file, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
