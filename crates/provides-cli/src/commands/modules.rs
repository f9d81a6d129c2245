//! `provides modules` command implementation.

use miette::{IntoDiagnostic, Result};
use provides_core::version::SCHEMA_VERSION;
use provides_core::{provided_modules, Error};
use serde::Serialize;
use std::path::PathBuf;

/// Modules result for JSON output (locked format: { ok, package, modules }).
#[derive(Serialize)]
struct ModulesJsonResult<'a> {
    schema_version: u32,
    ok: bool,
    package: &'a str,
    modules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the modules command.
///
/// When `json` is true, outputs a single JSON object to stdout, including
/// on a not-found error (exit code 1). Otherwise prints one module name
/// per line, sorted.
pub fn run(package: &str, search_paths: &[PathBuf], json: bool) -> Result<()> {
    tracing::debug!(package, paths = search_paths.len(), "looking up package");

    match provided_modules(package, search_paths) {
        Ok(modules) => {
            if json {
                let result = ModulesJsonResult {
                    schema_version: SCHEMA_VERSION,
                    ok: true,
                    package,
                    modules: Some(modules.into_iter().collect()),
                    error: None,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).into_diagnostic()?
                );
            } else {
                for name in &modules {
                    println!("{name}");
                }
            }
            Ok(())
        }
        Err(err @ Error::PackageNotFound { .. }) => {
            if json {
                let result = ModulesJsonResult {
                    schema_version: SCHEMA_VERSION,
                    ok: false,
                    package,
                    modules: None,
                    error: Some(err.to_string()),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).into_diagnostic()?
                );
                std::process::exit(1);
            }
            Err(err).into_diagnostic()
        }
        // Read faults on a matched RECORD are environment problems, not
        // part of the lookup contract; surface them as-is.
        Err(err) => Err(err).into_diagnostic(),
    }
}
