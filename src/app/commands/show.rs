//! Layout report for display.

use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Category, LayoutVariant, ProjectLayout};
use crate::ports::{BaseDirResolver, LayoutFilesystem};

/// Snapshot of a layout and the on-disk state of its directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub variant: LayoutVariant,
    pub base_dir: PathBuf,
    pub directories: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub category: Category,
    pub path: PathBuf,
    pub exists: bool,
}

/// Build a report for `layout` using the context's variant and filesystem.
pub fn execute<R, F>(ctx: &AppContext<R, F>, layout: &ProjectLayout) -> LayoutReport
where
    R: BaseDirResolver,
    F: LayoutFilesystem,
{
    let directories = layout
        .directories()
        .map(|(category, dir)| DirectoryEntry {
            category,
            path: dir.to_path_buf(),
            exists: ctx.filesystem().is_dir(dir),
        })
        .collect();

    LayoutReport {
        variant: ctx.resolver().variant(),
        base_dir: layout.base_dir().to_path_buf(),
        directories,
    }
}

impl LayoutReport {
    /// One `<category>\t<path>` line per directory, preceded by the base.
    pub fn render_text(&self) -> String {
        let mut out = format!("base\t{}\n", self.base_dir.display());
        for entry in &self.directories {
            let missing = if entry.exists { "" } else { "\t(missing)" };
            out.push_str(&format!("{}\t{}{}\n", entry.category, entry.path.display(), missing));
        }
        out
    }

    pub fn render_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
