//! Ambient module declarations for non-code imports.

use crate::builder::{CodeFragment, Renderable};

/// `declare module "<pattern>"` with a typed default export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientModule {
    pub pattern: String,
    pub ty: String,
}

impl AmbientModule {
    pub fn new(pattern: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for AmbientModule {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("declare module \"{}\" {{", self.pattern),
            vec![
                CodeFragment::line(format!("const value: {};", self.ty)),
                CodeFragment::line("export default value;"),
            ],
            Some("}".to_string()),
        )]
    }
}
