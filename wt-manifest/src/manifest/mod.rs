//! Manifest types and parsing for wrangler.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::WranglerToml;
use indexmap::IndexMap;
pub use parse::parse_manifest;
use serde::Deserialize;

use crate::{Bindings, Error, Result, ScriptFormat};

/// Root manifest for wrangler.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Worker name
    pub name: Option<String>,

    /// Entry point, relative to the manifest
    pub main: Option<PathBuf>,

    #[serde(default)]
    pub build: BuildConfig,

    /// Top-level bindings
    #[serde(flatten)]
    pub bindings: Bindings,

    /// Named environments; their bindings replace the top-level ones
    #[serde(default)]
    pub env: IndexMap<String, Bindings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadConfig {
    /// Explicit entry-point format
    pub format: Option<ScriptFormat>,
}

impl Manifest {
    /// Bindings for the given environment, or the top-level bindings.
    ///
    /// Bindings are not inherited: an environment that declares no
    /// `kv_namespaces` has none, whatever the top level says.
    pub fn bindings_for(&self, env: Option<&str>) -> Result<&Bindings> {
        match env {
            None => Ok(&self.bindings),
            Some(name) => self.env.get(name).ok_or_else(|| {
                let available = if self.env.is_empty() {
                    "(none)".to_string()
                } else {
                    self.env.keys().cloned().collect::<Vec<_>>().join(", ")
                };
                Box::new(Error::UnknownEnvironment {
                    name: name.to_string(),
                    available,
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BindingKind;

    const MANIFEST: &str = r#"
        name = "my-worker"
        main = "src/index.ts"

        kv_namespaces = [{ binding = "CACHE", id = "abc" }]

        [vars]
        MODE = "dev"

        [env.production]
        kv_namespaces = [{ binding = "PROD_CACHE", id = "def" }]

        [env.production.vars]
        MODE = "prod"

        [env.staging]
    "#;

    #[test]
    fn test_top_level_bindings() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let bindings = manifest.bindings_for(None).unwrap();

        assert_eq!(manifest.name.as_deref(), Some("my-worker"));
        assert_eq!(bindings.names(BindingKind::KvNamespace), ["CACHE"]);
        assert_eq!(bindings.vars["MODE"].as_str(), Some("dev"));
    }

    #[test]
    fn test_environment_bindings_replace_top_level() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let bindings = manifest.bindings_for(Some("production")).unwrap();

        assert_eq!(bindings.names(BindingKind::KvNamespace), ["PROD_CACHE"]);
        assert_eq!(bindings.vars["MODE"].as_str(), Some("prod"));
    }

    #[test]
    fn test_environment_without_bindings_is_empty() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let bindings = manifest.bindings_for(Some("staging")).unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_unknown_environment() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let err = manifest.bindings_for(Some("qa")).unwrap_err();
        match *err {
            Error::UnknownEnvironment { name, available } => {
                assert_eq!(name, "qa");
                assert_eq!(available, "production, staging");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
