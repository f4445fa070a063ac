use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate binding error.
    pub fn duplicate_binding_error(
        &self,
        name: impl Into<String>,
        first_kind: &'static str,
        second_kind: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateBinding {
            src: self.named_source(),
            span,
            name: name.into(),
            first_kind,
            second_kind,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(help("pass the path to your wrangler.toml with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read entry point '{}'", .path.display())]
    #[diagnostic(
        code(workertypes::entry_point),
        help("check the `main` field, or pass --format to skip format detection")
    )]
    EntryPoint {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wrangler.toml")]
    #[diagnostic(code(workertypes::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(workertypes::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("binding name '{name}' is used more than once")]
    #[diagnostic(
        code(workertypes::duplicate_binding),
        help("'{name}' is declared as both a {first_kind} and a {second_kind}; rename one of them")
    )]
    DuplicateBinding {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate binding")]
        span: Option<SourceSpan>,
        name: String,
        first_kind: &'static str,
        second_kind: &'static str,
    },

    #[error("no environment named '{name}'")]
    #[diagnostic(
        code(workertypes::unknown_environment),
        help("available environments: {available}")
    )]
    UnknownEnvironment { name: String, available: String },

    #[error("unknown script format '{value}'")]
    #[diagnostic(help("valid formats are: modules, service-worker"))]
    InvalidFormat { value: String },
}
