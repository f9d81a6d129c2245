pub mod modules;
pub mod version;
