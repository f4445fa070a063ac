//! TypeScript interface builder.

use crate::builder::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// `name: ty;`
    pub fn to_member(&self) -> String {
        format!("{}: {};", self.name, self.ty)
    }
}

/// A module-private TypeScript interface.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add fields from an iterator.
    pub fn fields(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::line(format!("interface {} {{}}", self.name))]
        } else {
            vec![CodeFragment::block(
                format!("interface {} {{", self.name),
                self.fields
                    .iter()
                    .map(|field| CodeFragment::line(field.to_member()))
                    .collect(),
                Some("}".to_string()),
            )]
        }
    }
}
