use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use facesense_core::report::FrameReport;

/// Render face-analysis frame dumps as human-readable reports.
#[derive(Parser)]
#[command(name = "facesense")]
struct Cli {
    /// Input JSON file: an array of frame reports.
    input: PathBuf,

    /// Skip frames with no detections at all.
    #[arg(long)]
    skip_empty: bool,

    /// Render at most this many frames.
    #[arg(long)]
    limit: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let data = fs::read_to_string(&cli.input)?;
    let frames: Vec<FrameReport> = serde_json::from_str(&data)?;

    let limit = cli.limit.unwrap_or(frames.len());
    let mut rendered = 0usize;
    for (idx, frame) in frames.iter().take(limit).enumerate() {
        if cli.skip_empty && frame.is_empty() {
            continue;
        }
        println!("Frame {idx}");
        print!("{frame}");
        rendered += 1;
    }

    log::info!("Rendered {rendered} of {} frames", frames.len());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.limit == Some(0) {
        return Err("Limit must be at least 1".into());
    }
    Ok(())
}
