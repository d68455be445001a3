#![allow(clippy::doc_markdown)] // Generated file contains OPT_LEVEL without backticks
#![allow(dead_code)] // Only a few of the generated build constants are used

use std::sync::LazyLock;

include!(concat!(env!("OUT_DIR"), "/built.rs"));

/// Version of the software including
/// - Git commit hash
/// - Git dirty info (whether the repo had uncommitted changes)
/// - Cargo package version if no git info found
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    format_version(PKG_VERSION, GIT_COMMIT_HASH, GIT_DIRTY)
});

/// Joins the package version with optional git metadata.
fn format_version(pkg_version: &str, commit: Option<&str>, dirty: Option<bool>) -> String {
    let prefix = match commit {
        Some(hash) => format!("{pkg_version}-{hash}"),
        None => pkg_version.to_string(),
    };
    let suffix = match dirty {
        Some(true) => "-dirty",
        _ => "",
    };
    format!("{prefix}{suffix}")
}
