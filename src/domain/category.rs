use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// One of the managed project subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Data,
    Plots,
    Images,
    Scripts,
}

impl Category {
    /// All categories in creation order.
    pub const ALL: [Category; 4] =
        [Category::Data, Category::Plots, Category::Images, Category::Scripts];

    /// Literal directory name under the base directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Data => "data",
            Category::Plots => "plots",
            Category::Images => "images",
            Category::Scripts => "scripts",
        }
    }

    /// Parse a directory name, accepting the singular forms as well.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "data" => Some(Category::Data),
            "plots" | "plot" => Some(Category::Plots),
            "images" | "image" => Some(Category::Images),
            "scripts" | "script" => Some(Category::Scripts),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_dir_name(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}
