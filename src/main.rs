//! recipient-check - Main entry point
//!
//! Validates recipients given on the command line, or one per stdin line,
//! and writes one report per candidate to stdout.
//!
//! ```text
//! recipient-check <email|phone|postcode> [VALUE...]
//! ```

use anyhow::{Context, Result};
use notify_recipients::{Config, OutputFormat, RecipientKind, ValidationReport};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: recipient-check <email|phone|postcode> [VALUE...]";

fn main() -> Result<ExitCode> {
    // Load configuration (before logging, which needs the configured level)
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only, stdout carries the reports)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let kind = match args.next().map(|arg| arg.parse::<RecipientKind>()) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            error!("{}", e);
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(2));
        }
        None => {
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let values: Vec<String> = args.collect();
    info!(
        %kind,
        allow_international = config.allow_international_numbers,
        "Checking recipients"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_valid = true;

    let mut emit = |input: &str| -> Result<()> {
        let report = ValidationReport::check(kind, input, config.allow_international_numbers);
        debug!(input, valid = report.is_valid(), "Checked candidate");
        all_valid &= report.is_valid();
        write_report(&mut out, &report, config.output_format)
    };

    if values.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            emit(&line)?;
        }
    } else {
        for value in &values {
            emit(value)?;
        }
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn write_report(out: &mut impl Write, report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match (&report.canonical, &report.error) {
            (Some(canonical), _) => writeln!(out, "OK {}", canonical)?,
            (None, Some(error)) => writeln!(out, "ERR {}", error)?,
            (None, None) => writeln!(out, "ERR")?,
        },
    }
    Ok(())
}
