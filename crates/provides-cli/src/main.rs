#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use provides_core::default_search_paths;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "provides")]
#[command(author, version, about = "Map an installed package to the modules it provides", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// List the top-level importable modules an installed package provides
    Modules {
        /// Package name (case and separator insensitive)
        package: String,

        /// Search directory; repeat to search several, in priority order.
        /// Defaults to PYTHONPATH, or the current directory.
        #[arg(long, value_name = "DIR")]
        path: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json);

    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Modules { package, path } => {
            // The default search path is resolved once, here at the
            // boundary; the core lookup only ever sees an explicit list.
            let search_paths = if path.is_empty() {
                default_search_paths()
            } else {
                path
            };
            commands::modules::run(&package, &search_paths, cli.json)
        }
    }
}
