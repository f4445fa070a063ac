mod check;
mod completions;
mod types;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use types::TypesCommand;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for workertypes_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for workertypes_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "workertypes")]
#[command(version)]
#[command(about = "Generate TypeScript declarations for Worker bindings")]
pub(crate) struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Types(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate worker-configuration.d.ts from wrangler.toml
    Types(TypesCommand),

    /// Validate wrangler.toml and list its bindings
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use workertypes_manifest::ScriptFormat;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_types_command() {
        let cli = Cli::try_parse_from([
            "workertypes",
            "types",
            "--config",
            "worker/wrangler.toml",
            "--env",
            "production",
            "--format",
            "service-worker",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Types(cmd) => {
                assert_eq!(cmd.config.to_str(), Some("worker/wrangler.toml"));
                assert_eq!(cmd.env.as_deref(), Some("production"));
                assert_eq!(cmd.format, Some(ScriptFormat::ServiceWorker));
                assert!(cmd.dry_run);
            }
            _ => panic!("expected types command"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["workertypes", "types", "--format", "commonjs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["workertypes", "check", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
