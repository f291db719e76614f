//! Layout initialization.

use crate::app::AppContext;
use crate::domain::{AppError, ProjectLayout};
use crate::ports::{BaseDirResolver, LayoutFilesystem};

/// Resolve the base directory and make every managed directory exist.
///
/// Stops at the first directory that cannot be created; no layout is
/// returned unless all four exist.
pub fn execute<R, F>(ctx: &AppContext<R, F>) -> Result<ProjectLayout, AppError>
where
    R: BaseDirResolver,
    F: LayoutFilesystem,
{
    let base_dir = ctx.resolver().resolve()?;
    let layout = ProjectLayout::new(base_dir);

    for (_, dir) in layout.directories() {
        ctx.filesystem()
            .create_dir_all(dir)
            .map_err(|source| AppError::Filesystem { path: dir.to_path_buf(), source })?;
    }

    Ok(layout)
}
