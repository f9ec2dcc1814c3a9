use std::path::PathBuf;
use thiserror::Error;

/// Failure to assemble a pattern library from disk.
///
/// Loading is all-or-nothing: any of these aborts the whole load.
#[derive(Debug, Error)]
pub enum PatternLoadError {
    #[error("Pattern directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed pattern definition at {}:{line}: {content:?} (expected NAME followed by a pattern)", path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

impl PatternLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
