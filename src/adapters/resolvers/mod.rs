//! `BaseDirResolver` implementations, one per layout variant.

mod fixed;
mod script_relative;
mod source;
mod working_directory;

pub use fixed::FixedBaseDir;
pub use script_relative::ScriptRelativeResolver;
pub use source::BaseDirSource;
pub use working_directory::WorkingDirectoryResolver;
