//! md2html: CLI tool to convert Markdown files to HTML

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use md2html_core::convert_reader;

#[derive(Parser, Debug)]
#[command(name = "md2html")]
#[command(about = "Convert a Markdown file to HTML")]
#[command(version)]
#[command(after_help = "Example:
  md2html README.md README.html")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Usage errors exit with 1, not clap's default 2
            e.print().context("Failed to print usage error")?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => e.exit(),
    };

    if !cli.input.is_file() {
        anyhow::bail!("Missing {}", cli.input.display());
    }

    convert_file(&cli.input, &cli.output, cli.verbose)?;

    Ok(ExitCode::SUCCESS)
}

/// Convert a single Markdown file, replacing `output` only on success
fn convert_file(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("Converting: {} -> {}", input.display(), output.display());
    }

    let file =
        File::open(input).with_context(|| format!("Failed to read: {}", input.display()))?;
    let html = convert_reader(file)
        .with_context(|| format!("Failed to convert: {}", input.display()))?;

    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in: {}", parent.display()))?;
    staged
        .write_all(html.as_bytes())
        .with_context(|| format!("Failed to write: {}", output.display()))?;
    staged
        .persist(output)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    if verbose {
        eprintln!("Wrote {} bytes to {}", html.len(), output.display());
    }

    Ok(())
}
