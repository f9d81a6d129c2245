use std::path::PathBuf;
use thiserror::Error;

/// Core error type for provides operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No metadata directory for the requested package in any search path.
    ///
    /// Carries the name as originally requested, before canonicalization.
    #[error("Package not found: {package}")]
    PackageNotFound { package: String },

    #[error("Failed to read RECORD at {path}: {source}")]
    RecordRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    #[must_use]
    pub fn not_found(package: impl Into<String>) -> Self {
        Self::PackageNotFound {
            package: package.into(),
        }
    }
}
