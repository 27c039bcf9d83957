//! Reasons an input artifact contributes nothing to the rendered comment.
//!
//! None of these are fatal. The aggregating entry points log them at `debug`
//! and move on; they exist as a type so callers and tests can tell the
//! skip reasons apart.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("report {0} does not exist")]
    Missing(PathBuf),

    #[error("report {0} is empty")]
    Empty(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("report {path} holds a JSON {found}, expected an array")]
    NotAnArray { path: PathBuf, found: &'static str },
}

impl LoadError {
    /// Path of the artifact that was skipped.
    pub fn path(&self) -> &Path {
        let path = match self {
            Self::Missing(path) | Self::Empty(path) => path,
            Self::Io { path, .. } | Self::Json { path, .. } | Self::NotAnArray { path, .. } => {
                path
            }
        };
        path.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::NotAnArray {
            path: PathBuf::from("report.json"),
            found: "object",
        };
        assert_eq!(
            err.to_string(),
            "report report.json holds a JSON object, expected an array"
        );
        assert_eq!(err.path(), Path::new("report.json"));
    }

    #[test]
    fn test_load_error_missing_path() {
        let err = LoadError::Missing(PathBuf::from("gone.json"));
        assert_eq!(err.to_string(), "report gone.json does not exist");
        assert_eq!(err.path(), Path::new("gone.json"));
    }
}
