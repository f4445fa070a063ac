//! Declaration file assembly and writing.

use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;
use workertypes_core::{File, LogSink, Result, check_ownership};
use workertypes_manifest::ScriptFormat;

use crate::{
    CodeFile, RawCode,
    ast::{DeclareGlobal, Interface},
    code_file::Joined,
    mapper::TypeDefinitions,
};

/// Conventional name of the generated file.
pub const DECLARATION_FILE: &str = "worker-configuration.d.ts";

/// Marker identifying a file as ours to overwrite.
pub const GENERATED_MARKER: &str = "Generated by workertypes";

/// The declaration file for one set of definitions and entry-point format.
pub struct DeclarationFile<'a> {
    defs: &'a TypeDefinitions,
    format: ScriptFormat,
}

impl<'a> DeclarationFile<'a> {
    pub fn new(defs: &'a TypeDefinitions, format: ScriptFormat) -> Self {
        Self { defs, format }
    }

    /// The file body without the header.
    ///
    /// Modules get `interface Env`; service workers get an `export {}` marker
    /// and a `declare global` block of consts. Module declarations follow
    /// either way.
    pub fn body(&self) -> String {
        let env = self.defs.env.iter().cloned();
        let file = match self.format {
            ScriptFormat::Modules => CodeFile::new().add(Interface::new("Env").fields(env)),
            ScriptFormat::ServiceWorker => CodeFile::new().add(Joined(vec![
                Box::new(RawCode::new("export {};")),
                Box::new(DeclareGlobal::new().constants(env)),
            ])),
        };
        file.add_all(&self.defs.modules).render()
    }

    /// Header line naming the generator and the generation time.
    pub fn header(generated_at: DateTime<Utc>) -> String {
        format!(
            "// {} on {}",
            GENERATED_MARKER,
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    /// Header and body.
    pub fn render(&self, generated_at: DateTime<Utc>) -> String {
        format!("{}\n{}", Self::header(generated_at), self.body())
    }
}

/// What happened to the declaration file.
///
/// A foreign file at the target path is reported as
/// [`Error::ForeignFile`](workertypes_core::Error::ForeignFile) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written at this path.
    Written(PathBuf),
    /// There was nothing to declare; the file system was not touched.
    Skipped,
}

/// Writes `worker-configuration.d.ts` into a working directory.
pub struct DeclarationWriter<S> {
    working_dir: PathBuf,
    sink: S,
    generated_at: Option<DateTime<Utc>>,
}

impl<S: LogSink> DeclarationWriter<S> {
    /// Create a writer rooted at `working_dir` that reports generated
    /// content to `sink`.
    pub fn new(working_dir: impl Into<PathBuf>, sink: S) -> Self {
        Self {
            working_dir: working_dir.into(),
            sink,
            generated_at: None,
        }
    }

    /// Pin the header timestamp instead of using the current time.
    pub fn generated_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    /// Path the file is written to.
    pub fn target(&self) -> PathBuf {
        self.working_dir.join(DECLARATION_FILE)
    }

    /// Render the full file content without touching disk.
    pub fn preview(&self, defs: &TypeDefinitions, format: ScriptFormat) -> String {
        DeclarationFile::new(defs, format).render(self.timestamp())
    }

    /// Check ownership, then write the file unless there is nothing to declare.
    ///
    /// The ownership check runs first, so a foreign file is reported even
    /// for an empty configuration.
    pub fn write(&mut self, defs: &TypeDefinitions, format: ScriptFormat) -> Result<WriteOutcome> {
        check_ownership(&self.working_dir, DECLARATION_FILE, GENERATED_MARKER)?
            .ensure_writable()?;

        if defs.is_empty() {
            debug!("no bindings or module rules, skipping declaration file");
            return Ok(WriteOutcome::Skipped);
        }

        let file = DeclarationFile::new(defs, format);
        let body = file.body();
        let content = format!("{}\n{}", DeclarationFile::header(self.timestamp()), body);

        let target = self.target();
        File::new(&target, content).write()?;
        self.sink.log(&body);

        Ok(WriteOutcome::Written(target))
    }

    /// Consume the writer and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::ast::{AmbientModule, InterfaceField};

    fn defs() -> TypeDefinitions {
        TypeDefinitions {
            env: vec![
                InterfaceField::new("CACHE", "KVNamespace"),
                InterfaceField::new("PORT", "8080"),
            ],
            modules: vec![AmbientModule::new("*.txt", "string")],
        }
    }

    #[test]
    fn test_modules_body() {
        let defs = defs();
        let body = DeclarationFile::new(&defs, ScriptFormat::Modules).body();
        assert_eq!(
            body,
            "interface Env {\n  CACHE: KVNamespace;\n  PORT: 8080;\n}\n\n\
             declare module \"*.txt\" {\n  const value: string;\n  export default value;\n}\n"
        );
    }

    #[test]
    fn test_service_worker_body() {
        let defs = defs();
        let body = DeclarationFile::new(&defs, ScriptFormat::ServiceWorker).body();
        assert_eq!(
            body,
            "export {};\ndeclare global {\n  const CACHE: KVNamespace;\n  const PORT: 8080;\n}\n\n\
             declare module \"*.txt\" {\n  const value: string;\n  export default value;\n}\n"
        );
    }

    #[test]
    fn test_empty_env_with_modules() {
        let defs = TypeDefinitions {
            env: vec![],
            modules: vec![AmbientModule::new("*.bin", "ArrayBuffer")],
        };
        let body = DeclarationFile::new(&defs, ScriptFormat::Modules).body();
        assert!(body.starts_with("interface Env {}\n\ndeclare module \"*.bin\" {"));
    }

    #[test]
    fn test_header() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            DeclarationFile::header(at),
            "// Generated by workertypes on 2024-03-01T12:30:00Z"
        );
    }

    #[test]
    fn test_preview_is_reproducible_with_pinned_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let writer = DeclarationWriter::new(".", workertypes_core::NullSink).generated_at(at);
        let defs = defs();
        let first = writer.preview(&defs, ScriptFormat::Modules);
        let second = writer.preview(&defs.clone(), ScriptFormat::Modules);
        assert_eq!(first, second);
        assert!(first.starts_with("// Generated by workertypes on 2024-03-01T12:30:00Z\ninterface Env {"));
    }
}
