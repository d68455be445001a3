//! Compute the stable order of a list of integers.
//!
//! Ties are always broken by ascending original position, in both directions,
//! so the output is reproducible across runs and platforms.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use fgranges_lib::IntBuffer;
use fgranges_lib::logging::{OperationTimer, log_buffer_summary};
use fgranges_lib::order::Direction;
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, ValuesOptions, validate_same_len};

/// Print the permutation that sorts the given values.
#[derive(Debug, Parser)]
#[command(
    name = "order",
    about = "\x1b[38;5;30m[ORDERING]\x1b[0m       \x1b[36mPrint the stable sort order of integer values\x1b[0m",
    long_about = r#"
Print the permutation that sorts the given values, one index per line.

Equal values keep their original relative order in both ascending and descending
mode. With --second, values are ordered by the pair (first, second), e.g. range
starts and widths.

Example usage:
  fgranges order --values 3,1,3,2
  fgranges order --values 3,1,3,2 --desc --base 1
  fgranges order --values 5,1,5 --second 2,3,1
"#
)]
pub struct Order {
    /// Values to order
    #[command(flatten)]
    pub values: ValuesOptions,

    /// Secondary key, compared when the primary values are equal
    #[arg(long = "second", value_delimiter = ',', allow_hyphen_values = true)]
    pub second: Option<Vec<i32>>,

    /// Order from largest to smallest
    #[arg(long = "desc", default_value = "false")]
    pub desc: bool,

    /// Number the first position as this value (0 or 1 typically)
    #[arg(long = "base", default_value = "0")]
    pub base: usize,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl Order {
    /// Computes the order without performing any I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the secondary key has a different length, or if
    /// `--base` is too large to number every value.
    pub fn compute(&self) -> Result<Vec<usize>> {
        let direction = Direction::from_desc(self.desc);
        let first = IntBuffer::from(self.values.values.as_slice());
        log_buffer_summary("Values", first.len(), first.capacity());
        let order = match &self.second {
            Some(second) => {
                validate_same_len(("--values", first.len()), ("--second", second.len()))?;
                let second = IntBuffer::from(second.as_slice());
                first.order_two_key(&second, direction, self.base)
            }
            None => first.order(direction, self.base),
        };
        order.with_context(|| format!("Cannot order values with --base {}", self.base))
    }
}

impl Command for Order {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        let timer = OperationTimer::new("Ordering values");
        info!("Direction: {:?}", Direction::from_desc(self.desc));
        info!("Base: {}", self.base);

        let order = self.compute()?;

        let mut out = self.output.writer()?;
        for idx in &order {
            writeln!(out, "{idx}")?;
        }
        out.flush()?;

        timer.log_completion(order.len() as u64);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(values: Vec<i32>, second: Option<Vec<i32>>, desc: bool, base: usize) -> Order {
        Order {
            values: ValuesOptions { values },
            second,
            desc,
            base,
            output: OutputOptions::default(),
        }
    }

    #[test]
    fn test_compute_single_key() {
        assert_eq!(order(vec![3, 1, 3, 2], None, false, 0).compute().unwrap(), vec![1, 3, 0, 2]);
        assert_eq!(order(vec![3, 1, 3, 2], None, true, 1).compute().unwrap(), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_compute_two_key() {
        let cmd = order(vec![5, 1, 5], Some(vec![2, 3, 1]), false, 0);
        assert_eq!(cmd.compute().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_compute_two_key_length_mismatch() {
        let cmd = order(vec![5, 1, 5], Some(vec![2]), false, 0);
        assert!(cmd.compute().is_err());
    }

    #[test]
    fn test_compute_base_overflow() {
        let err = order(vec![1, 2], None, false, usize::MAX).compute().unwrap_err();
        assert!(format!("{err:#}").contains("--base"));
        assert!(order(vec![1, 2], Some(vec![3, 4]), true, usize::MAX).compute().is_err());
        assert_eq!(
            order(vec![2, 1], None, false, usize::MAX - 2).compute().unwrap(),
            vec![usize::MAX - 1, usize::MAX - 2]
        );
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.txt");
        let mut cmd = order(vec![2, 1], None, false, 0);
        cmd.output.output = Some(path.clone());
        cmd.execute("fgranges order").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "1\n0\n");
    }
}
