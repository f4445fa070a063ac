//! `declare global { ... }` blocks.

use super::InterfaceField;
use crate::builder::{CodeFragment, Renderable};

/// A global augmentation declaring each member as a `const`.
#[derive(Debug, Clone, Default)]
pub struct DeclareGlobal {
    consts: Vec<InterfaceField>,
}

impl DeclareGlobal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare constants from an iterator of fields.
    pub fn constants(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.consts.extend(fields);
        self
    }
}

impl Renderable for DeclareGlobal {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.consts.is_empty() {
            return vec![CodeFragment::line("declare global {}")];
        }

        vec![CodeFragment::block(
            "declare global {",
            self.consts
                .iter()
                .map(|field| CodeFragment::line(format!("const {}", field.to_member())))
                .collect(),
            Some("}".to_string()),
        )]
    }
}
