//! Default search path resolution.
//!
//! The search-path list is always an explicit argument to the core lookup;
//! callers that want the ambient default resolve it once at startup with
//! [`default_search_paths`] and thread it through.

use std::env;
use std::path::PathBuf;

/// Environment variable holding the default module search path.
pub const SEARCH_PATH_ENV: &str = "PYTHONPATH";

/// Resolve the default search paths from the environment.
///
/// Splits `PYTHONPATH` on the platform path-list separator. When it is
/// unset or empty, falls back to the current directory.
#[must_use]
pub fn default_search_paths() -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = env::var_os(SEARCH_PATH_ENV)
        .map(|raw| env::split_paths(&raw).collect())
        .unwrap_or_default();

    if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    }
}
