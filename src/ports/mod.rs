mod base_dir_resolver;
mod layout_filesystem;

pub use base_dir_resolver::BaseDirResolver;
pub use layout_filesystem::LayoutFilesystem;
