//! Binding tables that can appear at the top level of `wrangler.toml` or
//! inside an `[env.<name>]` section.

use std::{fmt, path::PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Every binding kind the generator recognizes.
///
/// [`BindingKind::ALL`] is the order in which kinds are emitted, which is
/// independent of the order keys appear in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    KvNamespace,
    Var,
    DurableObject,
    R2Bucket,
    D1Database,
    Service,
    AnalyticsEngineDataset,
    DispatchNamespace,
    Logfwdr,
    DataBlob,
    TextBlob,
    WasmModule,
    Unsafe,
    QueueProducer,
    SendEmail,
    Vectorize,
    Hyperdrive,
    MtlsCertificate,
}

impl BindingKind {
    /// All kinds, in emission order.
    pub const ALL: [BindingKind; 18] = [
        BindingKind::KvNamespace,
        BindingKind::Var,
        BindingKind::DurableObject,
        BindingKind::R2Bucket,
        BindingKind::D1Database,
        BindingKind::Service,
        BindingKind::AnalyticsEngineDataset,
        BindingKind::DispatchNamespace,
        BindingKind::Logfwdr,
        BindingKind::DataBlob,
        BindingKind::TextBlob,
        BindingKind::WasmModule,
        BindingKind::Unsafe,
        BindingKind::QueueProducer,
        BindingKind::SendEmail,
        BindingKind::Vectorize,
        BindingKind::Hyperdrive,
        BindingKind::MtlsCertificate,
    ];

    /// The manifest key this kind is declared under.
    pub fn config_key(&self) -> &'static str {
        match self {
            BindingKind::KvNamespace => "kv_namespaces",
            BindingKind::Var => "vars",
            BindingKind::DurableObject => "durable_objects.bindings",
            BindingKind::R2Bucket => "r2_buckets",
            BindingKind::D1Database => "d1_databases",
            BindingKind::Service => "services",
            BindingKind::AnalyticsEngineDataset => "analytics_engine_datasets",
            BindingKind::DispatchNamespace => "dispatch_namespaces",
            BindingKind::Logfwdr => "logfwdr.bindings",
            BindingKind::DataBlob => "data_blobs",
            BindingKind::TextBlob => "text_blobs",
            BindingKind::WasmModule => "wasm_modules",
            BindingKind::Unsafe => "unsafe.bindings",
            BindingKind::QueueProducer => "queues.producers",
            BindingKind::SendEmail => "send_email",
            BindingKind::Vectorize => "vectorize",
            BindingKind::Hyperdrive => "hyperdrive",
            BindingKind::MtlsCertificate => "mtls_certificates",
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            BindingKind::KvNamespace => "KV namespace",
            BindingKind::Var => "variable",
            BindingKind::DurableObject => "Durable Object",
            BindingKind::R2Bucket => "R2 bucket",
            BindingKind::D1Database => "D1 database",
            BindingKind::Service => "service",
            BindingKind::AnalyticsEngineDataset => "Analytics Engine dataset",
            BindingKind::DispatchNamespace => "dispatch namespace",
            BindingKind::Logfwdr => "log forwarding binding",
            BindingKind::DataBlob => "data blob",
            BindingKind::TextBlob => "text blob",
            BindingKind::WasmModule => "wasm module",
            BindingKind::Unsafe => "unsafe binding",
            BindingKind::QueueProducer => "queue producer",
            BindingKind::SendEmail => "send email binding",
            BindingKind::Vectorize => "Vectorize index",
            BindingKind::Hyperdrive => "Hyperdrive config",
            BindingKind::MtlsCertificate => "mTLS certificate",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All bindings declared for one environment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bindings {
    #[serde(default)]
    pub kv_namespaces: Vec<KvNamespace>,

    /// Plain variables, in declaration order.
    #[serde(default)]
    pub vars: IndexMap<String, toml::Value>,

    #[serde(default)]
    pub durable_objects: DurableObjects,

    #[serde(default)]
    pub r2_buckets: Vec<R2Bucket>,

    #[serde(default)]
    pub d1_databases: Vec<D1Database>,

    #[serde(default)]
    pub services: Vec<ServiceBinding>,

    #[serde(default)]
    pub analytics_engine_datasets: Vec<AnalyticsEngineDataset>,

    #[serde(default)]
    pub dispatch_namespaces: Vec<DispatchNamespace>,

    #[serde(default)]
    pub logfwdr: Logfwdr,

    /// Binding name → file path.
    #[serde(default)]
    pub data_blobs: IndexMap<String, PathBuf>,

    /// Binding name → file path.
    #[serde(default)]
    pub text_blobs: IndexMap<String, PathBuf>,

    /// Binding name → file path.
    #[serde(default)]
    pub wasm_modules: IndexMap<String, PathBuf>,

    #[serde(default, rename = "unsafe")]
    pub unsafe_bindings: UnsafeBindings,

    #[serde(default)]
    pub queues: Queues,

    #[serde(default)]
    pub send_email: Vec<SendEmail>,

    #[serde(default)]
    pub vectorize: Vec<Vectorize>,

    #[serde(default)]
    pub hyperdrive: Vec<Hyperdrive>,

    #[serde(default)]
    pub mtls_certificates: Vec<MtlsCertificate>,

    /// Module import rules.
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
}

impl Bindings {
    /// Binding identifiers declared for `kind`, in declaration order.
    pub fn names(&self, kind: BindingKind) -> Vec<&str> {
        fn collect<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<&str> {
            items.iter().map(name).collect()
        }

        match kind {
            BindingKind::KvNamespace => collect(&self.kv_namespaces, |b| b.binding.as_str()),
            BindingKind::Var => self.vars.keys().map(String::as_str).collect(),
            BindingKind::DurableObject => collect(&self.durable_objects.bindings, |b| b.name.as_str()),
            BindingKind::R2Bucket => collect(&self.r2_buckets, |b| b.binding.as_str()),
            BindingKind::D1Database => collect(&self.d1_databases, |b| b.binding.as_str()),
            BindingKind::Service => collect(&self.services, |b| b.binding.as_str()),
            BindingKind::AnalyticsEngineDataset => {
                collect(&self.analytics_engine_datasets, |b| b.binding.as_str())
            }
            BindingKind::DispatchNamespace => collect(&self.dispatch_namespaces, |b| b.binding.as_str()),
            BindingKind::Logfwdr => collect(&self.logfwdr.bindings, |b| b.name.as_str()),
            BindingKind::DataBlob => self.data_blobs.keys().map(String::as_str).collect(),
            BindingKind::TextBlob => self.text_blobs.keys().map(String::as_str).collect(),
            BindingKind::WasmModule => self.wasm_modules.keys().map(String::as_str).collect(),
            BindingKind::Unsafe => collect(&self.unsafe_bindings.bindings, |b| b.name.as_str()),
            BindingKind::QueueProducer => collect(&self.queues.producers, |b| b.binding.as_str()),
            BindingKind::SendEmail => collect(&self.send_email, |b| b.name.as_str()),
            BindingKind::Vectorize => collect(&self.vectorize, |b| b.binding.as_str()),
            BindingKind::Hyperdrive => collect(&self.hyperdrive, |b| b.binding.as_str()),
            BindingKind::MtlsCertificate => collect(&self.mtls_certificates, |b| b.binding.as_str()),
        }
    }

    /// Iterate over every `(kind, name)` pair in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (BindingKind, &str)> {
        BindingKind::ALL
            .into_iter()
            .flat_map(move |kind| self.names(kind).into_iter().map(move |name| (kind, name)))
    }

    /// Total number of bindings across all kinds.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no bindings and no module rules are declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.rules.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KvNamespace {
    #[serde(default)]
    pub binding: String,
    pub id: Option<String>,
    pub preview_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DurableObjects {
    #[serde(default)]
    pub bindings: Vec<DurableObjectBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DurableObjectBinding {
    #[serde(default)]
    pub name: String,
    pub class_name: Option<String>,
    pub script_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct R2Bucket {
    #[serde(default)]
    pub binding: String,
    pub bucket_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct D1Database {
    #[serde(default)]
    pub binding: String,
    pub database_name: Option<String>,
    pub database_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceBinding {
    #[serde(default)]
    pub binding: String,
    pub service: Option<String>,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalyticsEngineDataset {
    #[serde(default)]
    pub binding: String,
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DispatchNamespace {
    #[serde(default)]
    pub binding: String,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Logfwdr {
    #[serde(default)]
    pub bindings: Vec<LogfwdrBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogfwdrBinding {
    #[serde(default)]
    pub name: String,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnsafeBindings {
    #[serde(default)]
    pub bindings: Vec<UnsafeBinding>,
}

/// An unchecked binding passed through to the runtime as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnsafeBinding {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Queues {
    #[serde(default)]
    pub producers: Vec<QueueProducer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueueProducer {
    #[serde(default)]
    pub binding: String,
    pub queue: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendEmail {
    #[serde(default)]
    pub name: String,
    pub destination_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Vectorize {
    #[serde(default)]
    pub binding: String,
    pub index_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hyperdrive {
    #[serde(default)]
    pub binding: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MtlsCertificate {
    #[serde(default)]
    pub binding: String,
    pub certificate_id: Option<String>,
}

/// A rule describing how matching module imports are bundled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleRule {
    #[serde(rename = "type")]
    pub kind: RuleType,
    #[serde(default)]
    pub globs: Vec<String>,
    #[serde(default)]
    pub fallthrough: bool,
}

/// Module type of an import rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RuleType {
    ESModule,
    CommonJS,
    CompiledWasm,
    Text,
    Data,
    /// Any type not listed above.
    #[serde(other)]
    Other,
}
