//! Split values into groups and print each non-empty group under a padded key.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Parser;
use fgranges_lib::NestedIntBuffer;
use fgranges_lib::logging::{OperationTimer, format_count};
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, ValuesOptions, validate_same_len, write_csv_line};

/// Group values by an integer group id.
#[derive(Debug, Parser)]
#[command(
    name = "group",
    about = "\x1b[38;5;72m[RANGES]\x1b[0m         \x1b[36mGroup values by group id\x1b[0m",
    long_about = r#"
Collect values into groups by their group id and print one line per non-empty
group: the group key, a tab, then the comma-separated values in input order.

Keys are the group id plus --keyshift, zero-padded to ten digits so that they sort
lexically in numeric order. Group ids must be non-negative and below --max-groups
(default 1000000); one buffer is allocated per id up to the largest.

Example usage:
  fgranges group --values 10,20,30,40 --groups 0,2,0,2
  fgranges group --values 10,20 --groups 0,1 --keyshift 0
"#
)]
pub struct Group {
    /// Values to group
    #[command(flatten)]
    pub values: ValuesOptions,

    /// Group id of each value (0-based)
    #[arg(long = "groups", value_delimiter = ',', required = true)]
    pub groups: Vec<usize>,

    /// Largest number of groups to allocate; group ids must be below this
    #[arg(long = "max-groups", default_value = "1000000")]
    pub max_groups: usize,

    /// Added to each group id to form its key
    #[arg(long = "keyshift", allow_hyphen_values = true, default_value = "1")]
    pub keyshift: i32,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl Group {
    /// Collects the values into one inner buffer per group id.
    ///
    /// # Errors
    ///
    /// Returns an error if values and groups have different lengths, or if a
    /// group id is not below `--max-groups`.
    pub fn compute(&self) -> Result<NestedIntBuffer> {
        let values = &self.values.values;
        validate_same_len(("--values", values.len()), ("--groups", self.groups.len()))?;

        // One inner buffer per id up to the largest, capped at --max-groups
        let ngroups = match self.groups.iter().max() {
            Some(&g) => match g.checked_add(1) {
                Some(n) => n.min(self.max_groups),
                None => bail!("Group id {g} is too large"),
            },
            None => 0,
        };
        let mut nested = NestedIntBuffer::new(ngroups, ngroups)?;
        for (&value, &group) in values.iter().zip(&self.groups) {
            let Some(inner) = nested.get_mut(group) else {
                bail!(
                    "Group id {group} exceeds the limit of {} groups (--max-groups)",
                    self.max_groups
                );
            };
            inner.push(value)?;
        }
        Ok(nested)
    }
}

impl Command for Group {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        let timer = OperationTimer::new("Grouping values");

        let nested = self.compute()?;
        info!(
            "Collected {} values into {} groups",
            format_count(nested.total_len() as u64),
            format_count(nested.len() as u64)
        );

        let mut out = self.output.writer()?;
        for (key, values) in nested.to_named(self.keyshift) {
            write!(out, "{key}\t")?;
            write_csv_line(&mut out, &values)?;
        }
        out.flush()?;

        timer.log_completion(nested.total_len() as u64);
        Ok(())
    }
}
