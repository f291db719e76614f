mod memory_filesystem;
mod static_resolver;

pub use memory_filesystem::MemoryFilesystem;
pub use static_resolver::StaticResolver;
