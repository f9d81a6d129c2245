//! RECORD manifest parsing.
//!
//! A RECORD file lists every file a package installed, one per line, as
//! `path,hash,size`. Only the path is interesting here: its first segment
//! names the top-level module or package the file belongs to.

use std::collections::BTreeSet;

/// Extract the set of top-level importable names from RECORD text.
///
/// Total function: malformed lines are skipped or collapse to nothing,
/// never an error. An empty manifest yields an empty set.
#[must_use]
pub fn parse_record(text: &str) -> BTreeSet<String> {
    text.lines()
        // RECORD files written on old Macs used bare \r line endings
        .flat_map(|line| line.split('\r'))
        .filter_map(top_level_name)
        .collect()
}

/// Reduce one RECORD line to the top-level name it contributes, if any.
fn top_level_name(line: &str) -> Option<String> {
    // The two trailing fields (hash, size) are separator-free, so split
    // from the right: a path containing commas survives intact.
    let path = line.rsplitn(3, ',').last().unwrap_or(line);

    // RECORD paths are not required to use native separators.
    let name = path.split(['/', '\\']).next().unwrap_or(path);

    // Relative paths are typically data and not findable anyway; a hyphen
    // marks the .dist-info directory's own entries.
    if name.starts_with("..") || name.contains('-') {
        return None;
    }

    let name = name.strip_suffix(".py").unwrap_or(name);
    Some(name.to_string())
}
