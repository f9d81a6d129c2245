//! Installed-package lookup.
//!
//! Walks an ordered list of search directories looking for the metadata
//! directory of a package, then parses its RECORD manifest into the set
//! of top-level importable names. First match wins: as soon as one search
//! path yields the package, later paths are never consulted.

use crate::canonical::canonicalize_name;
use crate::dist_info;
use crate::error::Error;
use crate::record::parse_record;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Return the set of top-level modules provided by `package`.
///
/// `search_paths` is scanned in order; entries that are missing or not
/// directories are skipped silently. The package name is matched
/// case- and separator-insensitively against installed metadata
/// directories. A package may provide no modules at all, in which case
/// the set is empty.
///
/// # Errors
/// `Error::PackageNotFound` if no search path contains a metadata
/// directory for the package; `Error::RecordRead` if a matched RECORD
/// file cannot be read.
pub fn provided_modules(
    package: &str,
    search_paths: &[PathBuf],
) -> Result<BTreeSet<String>, Error> {
    let target = canonicalize_name(package);

    for search_dir in search_paths {
        if let Some(modules) = scan_dir(search_dir, &target)? {
            return Ok(modules);
        }
    }

    Err(Error::not_found(package))
}

/// Scan one search directory's immediate children for a metadata
/// directory whose canonicalized name equals `target`.
///
/// Returns `Ok(None)` when the directory is missing, unreadable, or holds
/// no match.
fn scan_dir(search_dir: &Path, target: &str) -> Result<Option<BTreeSet<String>>, Error> {
    if !search_dir.is_dir() {
        return Ok(None);
    }
    let Ok(entries) = fs::read_dir(search_dir) else {
        return Ok(None);
    };

    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(dir_name) = file_name.to_str() else {
            continue;
        };
        let Some(found) = dist_info::package_name(dir_name) else {
            continue;
        };
        if canonicalize_name(found) == target {
            // All valid installs ship a RECORD next to the metadata
            let record_path = entry.path().join("RECORD");
            let text = fs::read_to_string(&record_path).map_err(|source| Error::RecordRead {
                path: record_path,
                source,
            })?;
            return Ok(Some(parse_record(&text)));
        }
    }

    Ok(None)
}
