//! Package name canonicalization.
//!
//! Installed-package names compare case-insensitively, and `-`, `_`, `.`
//! are interchangeable separators (PEP 503). Both the queried name and
//! every candidate extracted from a metadata directory go through the same
//! normalization before comparison.

/// Canonicalize a package name for comparison.
///
/// Lowercases the name and collapses every run of `-`, `_`, `.` into a
/// single `-`:
///
/// ```
/// use provides_core::canonicalize_name;
/// assert_eq!(canonicalize_name("My-Package"), "my-package");
/// assert_eq!(canonicalize_name("my__package"), "my-package");
/// assert_eq!(canonicalize_name("MY.PACKAGE"), "my-package");
/// ```
#[must_use]
pub fn canonicalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            in_separator = true;
        } else {
            if in_separator {
                out.push('-');
                in_separator = false;
            }
            out.extend(c.to_lowercase());
        }
    }
    // A trailing separator run still contributes one '-'
    if in_separator {
        out.push('-');
    }

    out
}
