use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for projlayout operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A managed directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The base directory could not be determined.
    #[error("Failed to resolve base directory from {}: {source}", .path.display())]
    BaseDirUnresolved {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Category argument is not one of the managed directories.
    #[error("Unknown category '{0}': must be one of data, plots, images, scripts")]
    UnknownCategory(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } | AppError::BaseDirUnresolved { source, .. } => {
                source.kind()
            }
            AppError::Configuration(_)
            | AppError::UnknownCategory(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_names_the_path() {
        let err = AppError::Filesystem {
            path: PathBuf::from("/tmp/proj/images"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "File exists"),
        };

        assert_eq!(err.to_string(), "Failed to create directory /tmp/proj/images: File exists");
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn configuration_errors_are_invalid_input() {
        assert_eq!(AppError::config_error("bad").kind(), io::ErrorKind::InvalidInput);
        assert_eq!(AppError::UnknownCategory("x".into()).kind(), io::ErrorKind::InvalidInput);
    }
}
