use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A wrangler.toml file: where it lives and what it declares.
pub struct WranglerToml {
    path: PathBuf,
    manifest: Manifest,
}

impl WranglerToml {
    /// Open and parse a wrangler.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Directory the manifest lives in; relative paths inside it resolve here.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
