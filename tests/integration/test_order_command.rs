//! End-to-end CLI tests for the order command.

use rstest::rstest;
use tempfile::TempDir;

use crate::helpers::run_lines;

#[rstest]
#[case::ascending(&["order", "--values", "3,1,3,2"], &["1", "3", "0", "2"])]
#[case::descending(&["order", "--values", "3,1,3,2", "--desc"], &["0", "2", "3", "1"])]
#[case::one_based(&["order", "--values", "3,1,3,2", "--base", "1"], &["2", "4", "1", "3"])]
#[case::negative(&["order", "--values", "-1,-5,0"], &["1", "0", "2"])]
#[case::two_key(&["order", "--values", "5,1,5", "--second", "2,3,1"], &["1", "2", "0"])]
fn test_order_command(#[case] args: &[&str], #[case] expected: &[&str]) {
    assert_eq!(run_lines(args), expected);
}

#[test]
fn test_order_command_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("order.txt");
    let lines = run_lines(&["order", "--values", "2,1", "--output", path.to_str().unwrap()]);
    assert!(lines.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n0\n");
}
