//! Types command report data structures.

use std::path::PathBuf;

use workertypes_manifest::ScriptFormat;

use super::output::{Output, Report};

/// What the types command did with the declaration file.
#[derive(Debug)]
pub enum TypesResult {
    /// Dry run: the content that would be written.
    Preview { path: PathBuf, content: String },
    /// The file was written; `logged` is the body reported by the writer.
    Written { path: PathBuf, logged: Vec<String> },
    /// Nothing to declare.
    Skipped,
}

/// Report data from declaration generation.
#[derive(Debug)]
pub struct TypesReport {
    pub format: ScriptFormat,
    pub env: Option<String>,
    /// Number of environment members.
    pub members: usize,
    /// Number of ambient module declarations.
    pub modules: usize,
    pub result: TypesResult,
}

impl TypesReport {
    fn summary(&self) -> String {
        let env = self
            .env
            .as_deref()
            .map(|env| format!(", env {}", env))
            .unwrap_or_default();
        format!(
            "{} binding{}, {} module declaration{} ({}{})",
            self.members,
            if self.members == 1 { "" } else { "s" },
            self.modules,
            if self.modules == 1 { "" } else { "s" },
            self.format,
            env
        )
    }
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            TypesResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&self.summary());
            }
            TypesResult::Written { path, logged } => {
                for body in logged {
                    out.preformatted(body.trim_end());
                }
                out.section("Generated");
                out.added_item(&format!("{} - {}", path.display(), self.summary()));
            }
            TypesResult::Skipped => {
                out.preformatted("No bindings or module rules found; nothing to generate.");
            }
        }
    }
}
