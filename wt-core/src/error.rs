use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for file operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("a non-generated '{}' already exists", .path.display())]
    #[diagnostic(
        code(workertypes::foreign_file),
        help("rename or remove the existing file and try again")
    )]
    ForeignFile { path: PathBuf },

    #[error("failed to access '{}'", .path.display())]
    #[diagnostic(code(workertypes::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
