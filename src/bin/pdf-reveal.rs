//! PDF Reveal CLI tool
//!
//! Removes black rectangle overlays from a PDF and writes the result.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use pdf_reveal::pdf::{reveal_pdf, RevealOptions};

/// PDF Reveal - Remove black rectangle overlays while keeping the text underneath
#[derive(Parser)]
#[command(name = "pdf-reveal")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Reveal text hidden under black boxes
    pdf-reveal redacted.pdf revealed.pdf

    # Show which pages had overlays removed
    pdf-reveal -v redacted.pdf revealed.pdf

    # Keep streams uncompressed for inspection, then open the result
    pdf-reveal --no-compress --open redacted.pdf revealed.pdf")]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file path
    output: PathBuf,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Save streams without compressing them
    #[arg(long)]
    no_compress: bool,

    /// Open the output file after creation
    #[arg(long)]
    open: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = cmd_reveal(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pdf_reveal={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Open a file with the system default application
fn open_file(path: &PathBuf) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}

/// Remove overlays from the input and save to the output
fn cmd_reveal(cli: Cli) -> anyhow::Result<()> {
    let options = RevealOptions {
        input_path: cli.input,
        output_path: cli.output,
        compress: !cli.no_compress,
    };

    let report = reveal_pdf(&options)
        .with_context(|| format!("Failed to process {}", options.input_path.display()))?;

    for page in report.pages.iter().filter(|p| p.removed > 0) {
        tracing::info!(
            "Page {}: removed {} overlays ({} of {} streams rewritten)",
            page.page_number, page.removed, page.streams_modified, page.streams_scanned
        );
    }

    println!("Removed black rectangle overlays: {}", report.removed_total());
    println!("Output: {}", options.output_path.display());

    if cli.open {
        open_file(&options.output_path)
            .with_context(|| format!("Failed to open {}", options.output_path.display()))?;
    }

    Ok(())
}
