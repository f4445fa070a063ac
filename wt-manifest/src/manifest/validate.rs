//! Binding validation with source spans.

use std::collections::HashMap;

use miette::SourceSpan;

use crate::{BindingKind, Bindings, Result, error::SourceContext};

/// Reject bindings without a name and names declared more than once.
pub(crate) fn validate_bindings(bindings: &Bindings, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, BindingKind> = HashMap::new();

    for (kind, name) in bindings.iter() {
        if name.is_empty() {
            let key = kind.config_key().rsplit('.').next().unwrap_or_default();
            return Err(ctx.validation_error(
                format!("{} is missing a binding name", kind.label()),
                find_key_span(ctx.src(), key),
            ));
        }

        if let Some(first) = seen.insert(name, kind) {
            return Err(ctx.duplicate_binding_error(
                name,
                first.label(),
                kind.label(),
                find_name_span(ctx.src(), name),
            ));
        }
    }
    Ok(())
}

/// Find the span of a binding name in the TOML source.
///
/// Names show up either as quoted values (`binding = "NAME"`) or as keys
/// (`NAME = "value"` under `[vars]`). The last occurrence is used, since the
/// duplicate is the second declaration.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.rfind(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    find_key_span(src, name)
}

/// Find the span of a bare key at the start of a line or in a table header.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    let mut found = None;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let trimmed = line.trim_start();
        let candidates = [
            trimmed.strip_prefix(key).map(|rest| (indent, rest)),
            trimmed
                .strip_prefix("[[")
                .and_then(|rest| rest.find(key).map(|at| (indent + 2 + at, &rest[at + key.len()..]))),
            trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.find(key).map(|at| (indent + 1 + at, &rest[at + key.len()..]))),
        ];
        for (at, rest) in candidates.into_iter().flatten() {
            let rest = rest.trim_start();
            if rest.starts_with('=') || rest.starts_with(']') || rest.starts_with('.') {
                found = Some(SourceSpan::from((offset + at, key.len())));
                break;
            }
        }
        offset += line.len();
    }
    found
}
