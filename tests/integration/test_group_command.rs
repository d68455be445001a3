//! End-to-end CLI tests for the group command.

use crate::helpers::run_lines;

#[test]
fn test_group_command_basic() {
    let lines = run_lines(&["group", "--values", "10,20,30,40", "--groups", "0,2,0,2"]);
    assert_eq!(lines, vec!["0000000001\t10,30", "0000000003\t20,40"]);
}

#[test]
fn test_group_command_keyshift() {
    let lines = run_lines(&["group", "--values", "7,8", "--groups", "1,0", "--keyshift", "0"]);
    assert_eq!(lines, vec!["0000000000\t8", "0000000001\t7"]);
}
