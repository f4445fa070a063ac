//! TypeScript declaration nodes.
//!
//! Each node implements [`Renderable`](crate::builder::Renderable) and is
//! assembled into a file by [`CodeFile`](crate::CodeFile).

mod global;
mod interface;
mod module;

pub use global::DeclareGlobal;
pub use interface::{Interface, InterfaceField};
pub use module::AmbientModule;
