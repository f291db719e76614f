//! Resolved project layout and pure name resolution.

use std::path::{Path, PathBuf};

use super::Category;

/// The four managed directories under a resolved base directory.
///
/// Paths are fixed at construction. Name resolution never touches the
/// filesystem; use `app::commands::init` to make the directories exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    base_dir: PathBuf,
    data_dir: PathBuf,
    plots_dir: PathBuf,
    images_dir: PathBuf,
    scripts_dir: PathBuf,
}

impl ProjectLayout {
    /// Derive the layout for an absolute base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            data_dir: base_dir.join(Category::Data.dir_name()),
            plots_dir: base_dir.join(Category::Plots.dir_name()),
            images_dir: base_dir.join(Category::Images.dir_name()),
            scripts_dir: base_dir.join(Category::Scripts.dir_name()),
            base_dir,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory owned by a category.
    pub fn dir(&self, category: Category) -> &Path {
        match category {
            Category::Data => &self.data_dir,
            Category::Plots => &self.plots_dir,
            Category::Images => &self.images_dir,
            Category::Scripts => &self.scripts_dir,
        }
    }

    /// All managed directories in creation order.
    pub fn directories(&self) -> impl Iterator<Item = (Category, &Path)> {
        Category::ALL.into_iter().map(move |category| (category, self.dir(category)))
    }

    /// Join `name` onto the category's directory.
    ///
    /// The name is not validated: empty strings, `..` segments and absolute
    /// paths follow the platform join rule unchanged.
    pub fn resolve(&self, category: Category, name: impl AsRef<Path>) -> PathBuf {
        self.dir(category).join(name)
    }

    pub fn data(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(Category::Data, name)
    }

    pub fn plots(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(Category::Plots, name)
    }

    pub fn images(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(Category::Images, name)
    }

    pub fn scripts(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(Category::Scripts, name)
    }
}
