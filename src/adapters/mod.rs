pub mod filesystem;
pub mod resolvers;

pub use filesystem::LocalFilesystem;
pub use resolvers::{
    BaseDirSource, FixedBaseDir, ScriptRelativeResolver, WorkingDirectoryResolver,
};
