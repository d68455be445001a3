//! End-to-end CLI tests for the dedup command.

use crate::helpers::run_lines;

#[test]
fn test_dedup_command_basic() {
    assert_eq!(run_lines(&["dedup", "--values", "1,1,2,2,2,3"]), vec!["1", "2", "3"]);
}

#[test]
fn test_dedup_command_unsorted_input() {
    assert_eq!(run_lines(&["dedup", "--values", "5,-1,5,0,-1"]), vec!["-1", "0", "5"]);
}
