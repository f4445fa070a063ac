//! CodeFile abstraction for assembling a declaration file.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A file made of top-level elements separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .add(Interface::new("Env").fields(members))
///     .add_all(&modules)
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// Raw lines of code that implement Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

/// Several nodes rendered back to back, without blank lines between them.
pub struct Joined(pub Vec<Box<dyn Renderable>>);

impl Renderable for Joined {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.iter().flat_map(|node| node.to_fragments()).collect()
    }
}
