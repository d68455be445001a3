//! Shared helpers for CLI integration tests.

use std::process::{Command, Output};

/// Runs `fgranges` with the given arguments and captures its output.
pub fn run_fgranges(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fgranges"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run fgranges")
}

/// Runs `fgranges`, asserts success, and returns stdout split into lines.
pub fn run_lines(args: &[&str]) -> Vec<String> {
    let output = run_fgranges(args);
    assert!(
        output.status.success(),
        "fgranges {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}
