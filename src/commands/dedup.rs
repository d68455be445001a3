//! Sort integer values and drop duplicates.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fgranges_lib::IntBuffer;
use fgranges_lib::logging::{OperationTimer, format_count};
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, ValuesOptions};

/// Print the distinct values in ascending order.
#[derive(Debug, Parser)]
#[command(
    name = "dedup",
    about = "\x1b[38;5;30m[ORDERING]\x1b[0m       \x1b[36mSort integer values and remove duplicates\x1b[0m",
    long_about = r#"
Sort the given values ascending and remove duplicates, printing one value per line.

Example usage:
  fgranges dedup --values 5,1,5,3,1
"#
)]
pub struct Dedup {
    /// Values to deduplicate
    #[command(flatten)]
    pub values: ValuesOptions,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl Dedup {
    /// Sorts and compacts the values, returning the buffer and the number removed.
    #[must_use]
    pub fn compute(&self) -> (IntBuffer, usize) {
        let mut buf = IntBuffer::from(self.values.values.as_slice());
        buf.qsort();
        let removed = buf.delete_adjdups();
        (buf, removed)
    }
}

impl Command for Dedup {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        let timer = OperationTimer::new("Removing duplicate values");

        let (buf, removed) = self.compute();
        info!("Removed {} duplicate values", format_count(removed as u64));

        let mut out = self.output.writer()?;
        for value in &buf {
            writeln!(out, "{value}")?;
        }
        out.flush()?;

        timer.log_completion(buf.len() as u64);
        Ok(())
    }
}
