//! Translate ranges into another coordinate frame.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fgranges_lib::logging::{OperationTimer, log_buffer_summary};
use fgranges_lib::{IntBuffer, RangeBuffer};
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, validate_same_len};

/// Shift range starts and print the resulting ranges.
#[derive(Debug, Parser)]
#[command(
    name = "shift",
    about = "\x1b[38;5;72m[RANGES]\x1b[0m         \x1b[36mShift ranges by a fixed offset\x1b[0m",
    long_about = r#"
Add a fixed offset to every range start, keeping widths unchanged. Each output
line is "start<TAB>end<TAB>width" where end = start + width - 1.

Example usage:
  fgranges shift --starts 1,20 --widths 5,5 --shift 1000
  fgranges shift --starts 1001,1020 --widths 5,5 --shift -1000 --sort
"#
)]
pub struct Shift {
    /// Comma-separated range starts
    #[arg(long = "starts", value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub starts: Vec<i32>,

    /// Comma-separated range widths
    #[arg(long = "widths", value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub widths: Vec<i32>,

    /// Offset added to every start
    #[arg(long = "shift", allow_hyphen_values = true, default_value = "0")]
    pub shift: i32,

    /// Sort the ranges by start then width, and drop duplicates
    #[arg(long = "sort", default_value = "false")]
    pub sort: bool,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl Shift {
    /// Builds and shifts the ranges without performing any I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if starts and widths have different lengths.
    pub fn compute(&self) -> Result<RangeBuffer> {
        validate_same_len(("--starts", self.starts.len()), ("--widths", self.widths.len()))?;
        let mut ranges = RangeBuffer::from_parts(
            IntBuffer::from(self.starts.as_slice()),
            IntBuffer::from(self.widths.as_slice()),
        )?;
        ranges.shift(self.shift);
        if self.sort {
            ranges.sort()?;
            let removed = ranges.delete_adjdups()?;
            info!("Removed {removed} duplicate ranges");
        }
        Ok(ranges)
    }
}

impl Command for Shift {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        let timer = OperationTimer::new("Shifting ranges");
        info!("Shift: {}", self.shift);

        let ranges = self.compute()?;
        log_buffer_summary("Range starts", ranges.len(), ranges.starts().capacity());
        let ends = ranges.ends()?;

        let mut out = self.output.writer()?;
        for ((start, width), end) in ranges.iter().zip(ends.iter()) {
            writeln!(out, "{start}\t{end}\t{width}")?;
        }
        out.flush()?;

        timer.log_completion(ranges.len() as u64);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(starts: Vec<i32>, widths: Vec<i32>, shift: i32, sort: bool) -> Shift {
        Shift { starts, widths, shift, sort, output: OutputOptions::default() }
    }

    #[test]
    fn test_compute() {
        let ranges = shift(vec![1, 20], vec![5, 5], 1000, false).compute().unwrap();
        assert_eq!(ranges.starts().as_slice(), &[1001, 1020]);
        assert_eq!(ranges.widths().as_slice(), &[5, 5]);
    }

    #[test]
    fn test_compute_sorted() {
        let ranges = shift(vec![9, 1, 9], vec![2, 3, 2], -1, true).compute().unwrap();
        assert_eq!(ranges.iter().collect::<Vec<_>>(), vec![(0, 3), (8, 2)]);
    }

    #[test]
    fn test_compute_length_mismatch() {
        assert!(shift(vec![1, 2], vec![1], 0, false).compute().is_err());
    }

    #[test]
    fn test_execute_writes_ends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.tsv");
        let mut cmd = shift(vec![1, 20], vec![5, 1], 10, false);
        cmd.output.output = Some(path.clone());
        cmd.execute("fgranges shift").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "11\t15\t5\n30\t30\t1\n");
    }
}
