//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented line buffer
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for types that can be converted to code fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
