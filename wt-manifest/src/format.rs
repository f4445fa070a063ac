//! Entry-point format resolution.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Manifest, Result};

/// How a Worker's entry point exposes bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptFormat {
    /// ES modules: bindings arrive on an `env` object.
    #[default]
    Modules,
    /// Legacy service worker: bindings are globals.
    ServiceWorker,
}

impl ScriptFormat {
    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptFormat::Modules => "modules",
            ScriptFormat::ServiceWorker => "service-worker",
        }
    }
}

impl fmt::Display for ScriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScriptFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modules" | "esm" => Ok(ScriptFormat::Modules),
            "service-worker" | "sw" => Ok(ScriptFormat::ServiceWorker),
            _ => Err(Error::InvalidFormat {
                value: s.to_string(),
            }
            .to_string()),
        }
    }
}

/// Guess the format of an entry point from its source text.
///
/// A default export, either `export default ...` or `export { x as default }`,
/// means [`ScriptFormat::Modules`]. Anything else is a service worker.
/// Comments and string literals are blanked out before scanning.
pub fn detect_format(source: &str) -> ScriptFormat {
    let code = strip_comments_and_strings(source);
    let mut rest = code.as_str();
    while let Some(pos) = rest.find("export") {
        let after = &rest[pos + "export".len()..];
        let is_keyword = pos == 0
            || !rest[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$');

        if is_keyword {
            let trimmed = after.trim_start();
            if trimmed.starts_with("default")
                && !trimmed["default".len()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
            {
                return ScriptFormat::Modules;
            }
            if let Some(list) = trimmed.strip_prefix('{') {
                let list = list.split('}').next().unwrap_or_default();
                if list
                    .split(',')
                    .any(|item| item.split_whitespace().rev().take(2).eq(["default", "as"]))
                {
                    return ScriptFormat::Modules;
                }
            }
        }
        rest = after;
    }
    ScriptFormat::ServiceWorker
}

/// Replace comments and the contents of string literals with spaces.
fn strip_comments_and_strings(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                out.push(' ');
            }
            '"' | '\'' | '`' => {
                let quote = c;
                let mut escaped = false;
                for c in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == quote {
                        break;
                    }
                }
                out.push(' ');
            }
            c => out.push(c),
        }
    }
    out
}

/// Decide the entry-point format.
///
/// Precedence: `explicit`, then `build.upload.format`, then inspection of the
/// `main` entry (resolved against `base_dir`), then [`ScriptFormat::Modules`].
pub fn resolve_format(
    explicit: Option<ScriptFormat>,
    manifest: &Manifest,
    base_dir: &Path,
) -> Result<ScriptFormat> {
    if let Some(format) = explicit {
        debug!(%format, "using explicit format");
        return Ok(format);
    }

    if let Some(format) = manifest.build.upload.format {
        debug!(%format, "using format from build.upload.format");
        return Ok(format);
    }

    let Some(main) = &manifest.main else {
        debug!("no entry point configured, defaulting to modules");
        return Ok(ScriptFormat::Modules);
    };

    let path = base_dir.join(main);
    let source = std::fs::read_to_string(&path).map_err(|e| {
        Box::new(Error::EntryPoint {
            path: path.clone(),
            source: e,
        })
    })?;
    let format = detect_format(&source);
    debug!(path = %path.display(), %format, "detected format from entry point");
    Ok(format)
}
