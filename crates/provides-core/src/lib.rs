#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod canonical;
pub mod dist_info;
pub mod error;
pub mod paths;
pub mod provides;
pub mod record;
pub mod version;

pub use canonical::canonicalize_name;
pub use error::Error;
pub use paths::default_search_paths;
pub use provides::provided_modules;
pub use record::parse_record;
pub use version::VERSION;
