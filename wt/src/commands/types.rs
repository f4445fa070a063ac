use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tracing::debug;
use workertypes_codegen::{DeclarationWriter, TypeDefinitions, WriteOutcome};
use workertypes_manifest::{ScriptFormat, WranglerToml, resolve_format};

use super::UnwrapOrExit;
use crate::reports::{Report, TerminalOutput, TypesReport, TypesResult};

#[derive(Args)]
pub struct TypesCommand {
    /// Path to wrangler.toml (defaults to ./wrangler.toml)
    #[arg(short, long, default_value = "wrangler.toml")]
    pub config: PathBuf,

    /// Environment whose bindings to use
    #[arg(short, long)]
    pub env: Option<String>,

    /// Entry-point format (detected from `main` when omitted)
    #[arg(long)]
    pub format: Option<ScriptFormat>,

    /// Print the declaration file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Directory to write worker-configuration.d.ts into
    #[arg(short = 'C', long, default_value = ".")]
    pub cwd: PathBuf,
}

impl TypesCommand {
    /// Run the types command
    pub fn run(&self) -> Result<()> {
        let wrangler_toml = WranglerToml::open(&self.config).unwrap_or_exit();
        let manifest = wrangler_toml.manifest();

        let bindings = manifest
            .bindings_for(self.env.as_deref())
            .unwrap_or_exit();
        let format =
            resolve_format(self.format, manifest, wrangler_toml.base_dir()).unwrap_or_exit();
        debug!(%format, env = ?self.env, "resolved entry-point format");
        let defs = TypeDefinitions::from_bindings(bindings);

        let mut writer = DeclarationWriter::new(&self.cwd, Vec::new());
        let result = if self.dry_run {
            TypesResult::Preview {
                path: writer.target(),
                content: writer.preview(&defs, format),
            }
        } else {
            match writer.write(&defs, format).unwrap_or_exit() {
                WriteOutcome::Written(path) => TypesResult::Written {
                    path,
                    logged: writer.into_sink(),
                },
                WriteOutcome::Skipped => TypesResult::Skipped,
            }
        };

        let report = TypesReport {
            format,
            env: self.env.clone(),
            members: defs.env.len(),
            modules: defs.modules.len(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
