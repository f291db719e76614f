use std::path::{Path, PathBuf};

/// Optional configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "projlayout.toml";

/// `projlayout.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
