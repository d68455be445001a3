//! End-to-end CLI tests for the fgranges binary.
//!
//! These tests run the actual `fgranges` binary and validate its output.

mod helpers;
mod test_dedup_command;
mod test_error_paths;
mod test_group_command;
mod test_order_command;
mod test_shift_command;
