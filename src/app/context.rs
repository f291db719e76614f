use crate::ports::{BaseDirResolver, LayoutFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: BaseDirResolver, F: LayoutFilesystem> {
    resolver: R,
    filesystem: F,
}

impl<R: BaseDirResolver, F: LayoutFilesystem> AppContext<R, F> {
    /// Create a new application context.
    pub fn new(resolver: R, filesystem: F) -> Self {
        Self { resolver, filesystem }
    }

    /// Get a reference to the base directory resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Get a reference to the filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
