//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

/// Integer values given on the command line as a comma-separated list.
#[derive(Debug, Clone, Args)]
pub struct ValuesOptions {
    /// Comma-separated integer values (e.g. 3,1,3,2)
    #[arg(
        short = 'v',
        long = "values",
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true
    )]
    pub values: Vec<i32>,
}

/// Where to write command output.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputOptions {
    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl OutputOptions {
    /// Opens a buffered writer on the output file, or on stdout if none was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn writer(&self) -> Result<BufWriter<Box<dyn Write>>> {
        let inner: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout().lock()),
        };
        Ok(BufWriter::new(inner))
    }
}

/// Fails unless two parallel argument lists have the same length.
///
/// # Errors
///
/// Returns an error naming both options if the lengths differ.
pub fn validate_same_len(left: (&str, usize), right: (&str, usize)) -> Result<()> {
    if left.1 != right.1 {
        bail!(
            "{} and {} must have the same number of values, got {} and {}",
            left.0,
            right.0,
            left.1,
            right.1
        );
    }
    Ok(())
}

/// Writes values as a single comma-separated line.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_csv_line<W: Write>(out: &mut W, values: &[i32]) -> Result<()> {
    let line = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
    writeln!(out, "{line}")?;
    Ok(())
}
