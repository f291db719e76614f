use serde::{Deserialize, Serialize};

/// Confirmation printed after a working-directory startup.
pub const STARTUP_CONFIRMATION: &str = "startup configurations loaded successfully.";

/// How the base directory is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    /// Base is the parent of the directory holding the invoking script.
    ScriptRelative,
    /// Base is the process working directory.
    #[default]
    WorkingDirectory,
    /// Base was supplied explicitly by the caller.
    Explicit,
}

impl LayoutVariant {
    pub fn label(self) -> &'static str {
        match self {
            LayoutVariant::ScriptRelative => "script-relative",
            LayoutVariant::WorkingDirectory => "working-directory",
            LayoutVariant::Explicit => "explicit",
        }
    }

    /// Line printed to stdout once initialization succeeds, if any.
    pub fn confirmation(self) -> Option<&'static str> {
        match self {
            LayoutVariant::WorkingDirectory => Some(STARTUP_CONFIRMATION),
            LayoutVariant::ScriptRelative | LayoutVariant::Explicit => None,
        }
    }
}
