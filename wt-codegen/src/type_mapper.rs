//! Binding kind → TypeScript type table.

use workertypes_manifest::{BindingKind, RuleType};

/// How the declared type of a binding kind is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingType {
    /// Every binding of the kind gets this type.
    Fixed(&'static str),
    /// Each binding gets a literal type pinned to its value.
    Literal,
    /// The kind contributes one member, `name: ty`, when it has any bindings.
    Shared {
        name: &'static str,
        ty: &'static str,
    },
}

/// TypeScript type mapper for Worker bindings.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// The declared type for each binding kind.
    pub fn map_binding(&self, kind: BindingKind) -> BindingType {
        match kind {
            BindingKind::KvNamespace => BindingType::Fixed("KVNamespace"),
            BindingKind::Var => BindingType::Literal,
            BindingKind::DurableObject => BindingType::Fixed("DurableObjectNamespace"),
            BindingKind::R2Bucket => BindingType::Fixed("R2Bucket"),
            BindingKind::D1Database => BindingType::Fixed("D1Database"),
            BindingKind::Service => BindingType::Fixed("Fetcher"),
            BindingKind::AnalyticsEngineDataset => BindingType::Fixed("AnalyticsEngineDataset"),
            BindingKind::DispatchNamespace => BindingType::Fixed("DispatchNamespace"),
            BindingKind::Logfwdr => BindingType::Shared {
                name: "LOGFWDR_SCHEMA",
                ty: "any",
            },
            BindingKind::DataBlob => BindingType::Fixed("ArrayBuffer"),
            BindingKind::TextBlob => BindingType::Fixed("string"),
            BindingKind::WasmModule => BindingType::Fixed("WebAssembly.Module"),
            BindingKind::Unsafe => BindingType::Fixed("any"),
            BindingKind::QueueProducer => BindingType::Fixed("Queue"),
            BindingKind::SendEmail => BindingType::Fixed("SendEmail"),
            BindingKind::Vectorize => BindingType::Fixed("VectorizeIndex"),
            BindingKind::Hyperdrive => BindingType::Fixed("Hyperdrive"),
            BindingKind::MtlsCertificate => BindingType::Fixed("Fetcher"),
        }
    }

    /// Default-export type for modules matched by an import rule.
    ///
    /// Rule types that do not describe a non-code asset yield `None`.
    pub fn map_rule(&self, rule: RuleType) -> Option<&'static str> {
        match rule {
            RuleType::Text => Some("string"),
            RuleType::Data => Some("ArrayBuffer"),
            RuleType::CompiledWasm => Some("WebAssembly.Module"),
            RuleType::ESModule | RuleType::CommonJS | RuleType::Other => None,
        }
    }

    /// A literal type that pins `value` exactly.
    ///
    /// Primitives become literal types (`"bar"`, `8080`, `true`); tables and
    /// arrays become their JSON text.
    pub fn literal_type(&self, value: &toml::Value) -> String {
        match value {
            toml::Value::String(s) => json_string(s),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) if f.is_finite() => {
                serde_json::Number::from_f64(*f).map_or_else(|| "number".to_string(), |n| n.to_string())
            }
            toml::Value::Float(_) => "number".to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(dt) => json_string(&dt.to_string()),
            toml::Value::Array(_) | toml::Value::Table(_) => to_json(value).to_string(),
        }
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Convert a TOML value to JSON, keeping table key order.
fn to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::from(*i),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
    }
}
