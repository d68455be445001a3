//! End-to-end CLI tests for the shift command.

use crate::helpers::run_lines;

#[test]
fn test_shift_command_basic() {
    let lines = run_lines(&["shift", "--starts", "1,20", "--widths", "5,5", "--shift", "1000"]);
    assert_eq!(lines, vec!["1001\t1005\t5", "1020\t1024\t5"]);
}

#[test]
fn test_shift_command_negative_roundtrip() {
    let lines = run_lines(&["shift", "--starts", "1001,1020", "--widths", "5,5", "--shift", "-1000"]);
    assert_eq!(lines, vec!["1\t5\t5", "20\t24\t5"]);
}

#[test]
fn test_shift_command_sort_drops_duplicates() {
    let lines = run_lines(&["shift", "--starts", "9,1,9", "--widths", "2,3,2", "--sort"]);
    assert_eq!(lines, vec!["1\t3\t3", "9\t10\t2"]);
}
