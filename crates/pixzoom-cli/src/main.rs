//! pixzoom - crop, flip and zoom plain-text PGM/PPM images
//!
//! Loads a P2/P3 image, asks for the area to keep and the transforms to
//! apply, and writes the result as plain text again.

use anyhow::Result;
use clap::Parser;
use pixzoom_core::{Region, ValidationMode};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod prompt;
mod report;
mod session;

use prompt::Prompter;
use session::Options;

#[derive(Parser)]
#[command(name = "pixzoom")]
#[command(author, version, about = "Crop, flip and zoom plain-text PGM/PPM images")]
#[command(long_about = "
Crop, flip and zoom plain-text (P2/P3) PGM and PPM images up to 500x500 pixels.

Anything not given on the command line is asked for interactively.

Examples:
  pixzoom photo.ppm                                  # Answer every question
  pixzoom photo.ppm --region 10 10 60 40 --zoom 4    # Crop to 50x30, zoom to 200x120
  pixzoom photo.pgm --region 0 0 8 8 --flip-vertical --no-prompt -o out.pgm
  RUST_LOG=pixzoom_core=trace pixzoom photo.ppm      # Trace every transform
")]
struct Cli {
    /// Input image (plain PGM or PPM)
    input: PathBuf,

    /// Output image
    #[arg(short, long, default_value = "result.ppm")]
    output: PathBuf,

    /// Area to keep: upper-left X Y, then lower-right X Y (exclusive)
    #[arg(
        long,
        num_args = 4,
        value_names = ["X0", "Y0", "X1", "Y1"],
        allow_negative_numbers = true
    )]
    region: Option<Vec<i32>>,

    /// Flip the selected area top to bottom
    #[arg(long)]
    flip_vertical: bool,

    /// Flip the selected area left to right
    #[arg(long)]
    flip_horizontal: bool,

    /// Integer zoom factor
    #[arg(short, long, allow_negative_numbers = true)]
    zoom: Option<i64>,

    /// Require the region to lie fully inside the image
    #[arg(long)]
    strict: bool,

    /// Also write a PNG preview of the result
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write a JSON summary of the session
    #[arg(long)]
    report: Option<PathBuf>,

    /// Never ask; skip anything not given on the command line
    #[arg(long)]
    no_prompt: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            input: self.input.clone(),
            output: self.output.clone(),
            region: self
                .region
                .as_deref()
                .map(|c| Region::from_corners(c[0], c[1], c[2], c[3])),
            flip_vertical: self.flip_vertical,
            flip_horizontal: self.flip_horizontal,
            zoom: self.zoom,
            mode: if self.strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Compatible
            },
            png: self.png.clone(),
            interactive: !self.no_prompt,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr, prompts to stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.options();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let report = session::run(&options, &mut prompter)?;

    if let Some(path) = &cli.report {
        report.write(path)?;
    }

    Ok(())
}
