//! TypeScript declaration generator for Worker bindings.
//!
//! Turns the bindings of a `wrangler.toml` into `worker-configuration.d.ts`.
//!
//! # Usage
//!
//! ```ignore
//! use workertypes_codegen::{DeclarationWriter, TypeDefinitions};
//! use workertypes_core::NullSink;
//! use workertypes_manifest::{Manifest, ScriptFormat};
//!
//! let manifest = Manifest::from_file("wrangler.toml")?;
//! let defs = TypeDefinitions::from_bindings(&manifest.bindings);
//!
//! let mut writer = DeclarationWriter::new(".", NullSink);
//! let outcome = writer.write(&defs, ScriptFormat::Modules)?;
//! ```
//!
//! # Generated Output
//!
//! For the `modules` format the file declares `interface Env { ... }`. For
//! service workers it declares each binding as a global `const` inside
//! `declare global { ... }`. Import rules for text, data and compiled wasm
//! modules add `declare module "*.<ext>"` blocks in both cases.

mod code_file;
mod declaration;
mod mapper;
mod type_mapper;

pub mod ast;
pub mod builder;

pub use code_file::{CodeFile, RawCode};
pub use declaration::{
    DECLARATION_FILE, DeclarationFile, DeclarationWriter, GENERATED_MARKER, WriteOutcome,
};
pub use mapper::TypeDefinitions;
pub use type_mapper::{BindingType, TypeScriptTypeMapper};
