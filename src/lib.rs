//! projlayout: bootstrap the data/plots/images/scripts layout of an analysis project.
//!
//! ```no_run
//! let layout = projlayout::startup()?;
//! let table = layout.data("observations.csv");
//! # Ok::<(), projlayout::AppError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{
    BaseDirSource, FixedBaseDir, LocalFilesystem, ScriptRelativeResolver,
    WorkingDirectoryResolver,
};
pub use app::api::{
    DirectoryEntry, LayoutReport, configured_source, configured_source_at, initialize,
    initialize_at, layout_report, prepare, resolve_path, script_boilerplate, startup,
};
pub use domain::{AppError, Category, LayoutVariant, ProjectLayout, STARTUP_CONFIRMATION};
pub use ports::{BaseDirResolver, LayoutFilesystem};
