//! Gridcalc - evaluate a sheet of literals and SUM/MUL/AVG formulas

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use gridcalc_core::{InputFormat, OutputFormat, read_sheet, read_sheet_content, write_grid};
use gridcalc_engine::engine::{RenderOptions, Rounding, render_outputs};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(about = "Evaluate a spreadsheet of literals and SUM/MUL/AVG formulas", long_about = None)]
#[command(version)]
struct Cli {
    /// Sheet to render (.grd, .csv or .json); `-` reads .grd text from stdin
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format: table, markdown or csv
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Tie-breaking rule for AVG: half-away-from-zero or half-even
    #[arg(long, value_name = "RULE")]
    rounding: Option<Rounding>,

    /// Config file to use instead of the user config dir
    #[arg(short, long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore any config file
    #[arg(long)]
    no_config: bool,

    /// Write the rendered grid to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("GRIDCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = if cli.no_config {
        config::Config::default()
    } else {
        config::load_config(cli.config.as_deref())?
    };
    let format = cli.format.or(config.format).unwrap_or_default();
    let rounding = cli.rounding.or(config.rounding).unwrap_or_default();
    tracing::debug!(%format, %rounding, "settings");

    let sheet = if cli.file.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        read_sheet_content(&content, InputFormat::Grd).context("Failed to read stdin")?
    } else {
        read_sheet(&cli.file).with_context(|| format!("Failed to read {}", cli.file.display()))?
    };

    let grid =
        render_outputs(&sheet, &RenderOptions { rounding }).context("Failed to render sheet")?;
    let text = write_grid(&grid, format);

    match &cli.output {
        Some(path) => write_output(path, &text)?,
        None => print!("{}", text),
    }
    Ok(())
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote output");
    Ok(())
}
