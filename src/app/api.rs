//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{BaseDirSource, LocalFilesystem};
use crate::app::{
    AppContext,
    commands::{init, show},
    config,
};
use crate::ports::BaseDirResolver;

pub use crate::app::commands::show::{DirectoryEntry, LayoutReport};
pub use crate::domain::{AppError, Category, LayoutVariant, ProjectLayout};

/// Create an `AppContext` on the local filesystem.
fn create_context<R: BaseDirResolver>(resolver: R) -> AppContext<R, LocalFilesystem> {
    AppContext::new(resolver, LocalFilesystem::new())
}

/// Initialize the layout without printing anything.
pub fn prepare(source: BaseDirSource) -> Result<ProjectLayout, AppError> {
    init::execute(&create_context(source))
}

/// Initialize the layout and print the variant's confirmation line, if any.
pub fn initialize(source: BaseDirSource) -> Result<ProjectLayout, AppError> {
    let variant = source.variant();
    let layout = prepare(source)?;
    if let Some(line) = variant.confirmation() {
        println!("{}", line);
    }
    Ok(layout)
}

// =============================================================================
// Variant entry points
// =============================================================================

/// Set up the layout one level above the directory holding `script`.
///
/// `scripts` resolves to `<base>/scripts`, not to the script's own directory;
/// the two only coincide when the script lives in a folder named `scripts`.
/// Prints nothing on success.
pub fn script_boilerplate(script: impl Into<PathBuf>) -> Result<ProjectLayout, AppError> {
    initialize(BaseDirSource::ScriptRelative(script.into()))
}

/// Set up the layout in the current working directory and print the startup
/// confirmation.
pub fn startup() -> Result<ProjectLayout, AppError> {
    initialize(BaseDirSource::WorkingDirectory)
}

/// Set up the layout under an explicit base directory, which may not exist yet.
pub fn initialize_at(base: impl Into<PathBuf>) -> Result<ProjectLayout, AppError> {
    initialize(BaseDirSource::Explicit(base.into()))
}

// =============================================================================
// Configuration and inspection
// =============================================================================

/// Resolver selected by `projlayout.toml` in the current directory.
pub fn configured_source() -> Result<BaseDirSource, AppError> {
    configured_source_at(&std::env::current_dir()?)
}

/// Resolver selected by `projlayout.toml` in `root`.
pub fn configured_source_at(root: &Path) -> Result<BaseDirSource, AppError> {
    config::load_source(root)
}

/// Initialize silently and resolve `name` inside `category`.
pub fn resolve_path(
    source: BaseDirSource,
    category: Category,
    name: &str,
) -> Result<PathBuf, AppError> {
    Ok(prepare(source)?.resolve(category, name))
}

/// Initialize silently and describe the resulting layout.
pub fn layout_report(source: BaseDirSource) -> Result<LayoutReport, AppError> {
    let ctx = create_context(source);
    let layout = init::execute(&ctx)?;
    Ok(show::execute(&ctx, &layout))
}
