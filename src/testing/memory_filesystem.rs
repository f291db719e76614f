//! In-memory `LayoutFilesystem` for unit tests.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::LayoutFilesystem;

#[derive(Debug, Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    created: Vec<PathBuf>,
    failing: Option<PathBuf>,
}

/// Records directory creation; clones share state so tests can inspect it
/// after handing a copy to production code.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    state: Arc<Mutex<State>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail creation of `path` as if a plain file occupied it.
    pub fn failing_at(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().failing = Some(path.into());
        self
    }

    /// Directories newly created, in call order.
    pub fn created(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().created.clone()
    }
}

impl LayoutFilesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "File exists"));
        }
        if state.dirs.insert(path.to_path_buf()) {
            state.created.push(path.to_path_buf());
        }
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }
}
