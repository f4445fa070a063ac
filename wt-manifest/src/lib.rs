//! `wrangler.toml` parsing for the workertypes declaration generator.
//!
//! The manifest is read with `serde` + `toml` into [`Manifest`], whose
//! binding tables ([`Bindings`]) are the input to declaration generation.
//! Errors are [`miette`] diagnostics pointing back into the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bindings;
mod error;
mod format;
mod manifest;

pub use bindings::*;
pub use error::{Error, Result, SourceContext};
pub use format::{ScriptFormat, detect_format, resolve_format};
pub use manifest::{BuildConfig, Manifest, UploadConfig, WranglerToml, parse_manifest};
