//! Check command report data structures.

use std::path::PathBuf;

use workertypes_manifest::BindingKind;

use super::output::{Output, Report};

/// Bindings of one kind.
#[derive(Debug)]
pub struct BindingGroup {
    pub kind: BindingKind,
    pub names: Vec<String>,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Worker name, if set.
    pub name: Option<String>,
    /// Selected environment.
    pub env: Option<String>,
    /// Non-empty binding kinds, in emission order.
    pub groups: Vec<BindingGroup>,
    /// Number of module import rules.
    pub rules: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        if let Some(name) = &self.name {
            out.key_value("name", name);
        }
        if let Some(env) = &self.env {
            out.key_value("env", env);
        }

        if self.groups.is_empty() && self.rules == 0 {
            out.preformatted("No bindings declared.");
            return;
        }

        for group in &self.groups {
            out.newline();
            out.section(&format!("{} ({})", group.kind, group.kind.config_key()));
            for name in &group.names {
                out.list_item(name);
            }
        }

        if self.rules > 0 {
            out.newline();
            out.key_value("module rules", &self.rules.to_string());
        }
    }
}
