use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Error, Result, find_up};

/// Who owns an existing file at a generated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ownership {
    /// No file was found.
    Absent,
    /// A file carrying the generated marker was found.
    Generated(PathBuf),
    /// A file without the marker was found; it must not be overwritten.
    Foreign(PathBuf),
}

impl Ownership {
    /// Turn a foreign file into an error, passing the other cases through.
    pub fn ensure_writable(self) -> Result<Self> {
        match self {
            Ownership::Foreign(path) => Err(Error::ForeignFile { path }),
            other => Ok(other),
        }
    }
}

/// Look upward from `start` for `file_name` and classify it by `marker`.
///
/// The marker is matched on raw bytes, so a file that is not UTF-8 is still
/// classified. A file that disappears between lookup and read counts as
/// absent. Any other I/O failure is returned as [`Error::Io`].
pub fn check_ownership(start: &Path, file_name: &str, marker: &str) -> Result<Ownership> {
    let Some(path) = find_up(start, file_name)? else {
        debug!(file_name, "no existing file found");
        return Ok(Ownership::Absent);
    };

    let content = match std::fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Ownership::Absent),
        Err(e) => return Err(Error::io(path, e)),
    };

    if contains_marker(&content, marker.as_bytes()) {
        debug!(path = %path.display(), "existing file is generated");
        Ok(Ownership::Generated(path))
    } else {
        debug!(path = %path.display(), "existing file is not generated");
        Ok(Ownership::Foreign(path))
    }
}

fn contains_marker(content: &[u8], marker: &[u8]) -> bool {
    marker.is_empty() || content.windows(marker.len()).any(|window| window == marker)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, replacing whatever is there.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(())
    }
}
