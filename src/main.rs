//! reliefmd - disaster-relief data feeds to Markdown tables

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use reliefmd::category::Category;
use reliefmd::render::to_markdown;

/// Convert disaster-relief JSON data feeds into publishable Markdown tables
#[derive(Parser, Debug)]
#[command(name = "reliefmd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input JSON file
    input: PathBuf,

    /// Category tag (e.g. city-accommodation); read from the input's
    /// "dataType" key when omitted
    #[arg(short, long)]
    category: Option<String>,

    /// Write the Markdown table to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;
    let data: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON: {}", cli.input.display()))?;

    let tag = match cli.category {
        Some(tag) => tag,
        None => data
            .get("dataType")
            .and_then(Value::as_str)
            .context("no --category given and input has no \"dataType\" key")?
            .to_string(),
    };
    let category: Category = tag.parse()?;

    let table = category.build(&data)?;
    let markdown = to_markdown(&table);

    match cli.output {
        Some(path) => fs::write(&path, format!("{markdown}\n"))
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{markdown}"),
    }

    Ok(())
}
