//! CLI error handling: invalid input must fail with a non-zero exit status.

use rstest::rstest;

use crate::helpers::run_fgranges;

#[rstest]
#[case::order_key_mismatch(&["order", "--values", "1,2", "--second", "1"], "same number of values")]
#[case::shift_length_mismatch(&["shift", "--starts", "1,2", "--widths", "1"], "same number of values")]
#[case::group_length_mismatch(&["group", "--values", "1,2", "--groups", "0"], "same number of values")]
#[case::base_overflow(&["order", "--values", "1,2", "--base", "18446744073709551615"], "--base")]
#[case::group_id_overflow(&["group", "--values", "1", "--groups", "18446744073709551615"], "too large")]
#[case::group_id_over_limit(&["group", "--values", "1", "--groups", "5000000"], "--max-groups")]
#[case::not_an_integer(&["dedup", "--values", "1,x"], "invalid value")]
fn test_invalid_input_fails(#[case] args: &[&str], #[case] message: &str) {
    let output = run_fgranges(args);
    assert!(!output.status.success(), "fgranges {args:?} unexpectedly succeeded");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(message), "stderr did not mention {message:?}: {stderr}");
}

#[test]
fn test_missing_values_fails() {
    let output = run_fgranges(&["order"]);
    assert!(!output.status.success());
}
