//! Metadata directory name matching.
//!
//! An installed package leaves a `<name>-<version>.dist-info` directory
//! next to its modules, where `<version>` is one or more dot-separated
//! numeric groups. This module recognizes those directory names and
//! extracts the embedded package name. It never touches the filesystem,
//! so it can be tested against synthetic strings.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Anchored at the start only: trailing text after `.dist-info` still
/// matches.
fn metadata_dir_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<name>.*?)-\d+(\.\d+)*\.dist-info").unwrap()
    })
}

/// Extract the package name from a metadata directory name.
///
/// Returns `None` if the directory name does not look like
/// `<name>-<version>.dist-info`. The returned name is raw, not
/// canonicalized.
#[must_use]
pub fn package_name(dir_name: &str) -> Option<&str> {
    metadata_dir_pattern()
        .captures(dir_name)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}
