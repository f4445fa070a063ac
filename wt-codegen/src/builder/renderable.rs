//! Renderable trait and CodeFragment for decoupled code generation.

/// A fragment of generated code.
///
/// Fragments sit between AST nodes and the final string, so nodes can be
/// composed without holding a [`CodeBuilder`](super::CodeBuilder).
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A block with header, indented body, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Types that can be converted to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}
