mod convert;
mod error;
mod normalize;
mod transcribe;

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "relnote_converter",
    about = "Convert JSON release notes to plain-text files"
)]
struct Cli {
    /// Path to the JSON input file
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Directory to save output files (default: ./output)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.input.is_file() {
        bail!("input file {:?} does not exist", cli.input);
    }

    // The default output directory is resolved here, at the boundary; the
    // core only ever sees an explicit path.
    let output_dir = match cli.output {
        Some(dir) => dir,
        None => env::current_dir()?.join("output"),
    };

    let written = convert::convert_json_to_text(&cli.input, &output_dir)?;

    if written.is_empty() {
        println!("Warning: No release notes were found or converted.");
    } else {
        println!(
            "Successfully converted {} release notes to text files.",
            written.len()
        );
    }
    Ok(())
}
