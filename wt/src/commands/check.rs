use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use workertypes_manifest::{BindingKind, WranglerToml};

use super::UnwrapOrExit;
use crate::reports::{BindingGroup, CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to wrangler.toml (defaults to ./wrangler.toml)
    #[arg(short, long, default_value = "wrangler.toml")]
    pub config: PathBuf,

    /// Environment whose bindings to list
    #[arg(short, long)]
    pub env: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let wrangler_toml = WranglerToml::open(&self.config).unwrap_or_exit();
        let bindings = wrangler_toml
            .manifest()
            .bindings_for(self.env.as_deref())
            .unwrap_or_exit();

        let groups = BindingKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let names = bindings.names(kind);
                (!names.is_empty()).then(|| BindingGroup {
                    kind,
                    names: names.into_iter().map(str::to_string).collect(),
                })
            })
            .collect();

        let report = CheckReport {
            config_path: self.config.clone(),
            name: wrangler_toml.manifest().name.clone(),
            env: self.env.clone(),
            groups,
            rules: bindings.rules.len(),
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
