//! End-to-end tests for declaration generation against a real directory.

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use workertypes_codegen::{
    DECLARATION_FILE, DeclarationWriter, GENERATED_MARKER, TypeDefinitions, WriteOutcome,
};
use workertypes_core::{Error, NullSink};
use workertypes_manifest::{Manifest, ScriptFormat};

const WRANGLER_TOML: &str = r#"
name = "chat"
main = "src/index.ts"

kv_namespaces = [{ binding = "CACHE", id = "0f2ac74b498b48028cb68387c421e279" }]

[vars]
API_HOST = "api.example.com"
RETRIES = 3

[[durable_objects.bindings]]
name = "ROOMS"
class_name = "ChatRoom"

[[r2_buckets]]
binding = "ASSETS"
bucket_name = "chat-assets"

[[rules]]
type = "Text"
globs = ["**/*.txt"]
"#;

fn definitions(src: &str) -> TypeDefinitions {
    let manifest: Manifest = src.parse().expect("Failed to parse manifest");
    TypeDefinitions::from_bindings(&manifest.bindings)
}

fn writer(dir: &TempDir) -> DeclarationWriter<Vec<String>> {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    DeclarationWriter::new(dir.path(), Vec::new()).generated_at(at)
}

#[test]
fn test_modules_file() {
    let temp = TempDir::new().unwrap();
    let mut writer = writer(&temp);

    let outcome = writer
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap();

    let path = temp.path().join(DECLARATION_FILE);
    assert_eq!(outcome, WriteOutcome::Written(path.clone()));

    let content = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(content, @r#"
    // Generated by workertypes on 2024-01-01T00:00:00Z
    interface Env {
      CACHE: KVNamespace;
      API_HOST: "api.example.com";
      RETRIES: 3;
      ROOMS: DurableObjectNamespace;
      ASSETS: R2Bucket;
    }

    declare module "*.txt" {
      const value: string;
      export default value;
    }
    "#);
}

#[test]
fn test_service_worker_file() {
    let temp = TempDir::new().unwrap();
    let mut writer = writer(&temp);

    writer
        .write(&definitions(WRANGLER_TOML), ScriptFormat::ServiceWorker)
        .unwrap();

    let content = fs::read_to_string(temp.path().join(DECLARATION_FILE)).unwrap();
    insta::assert_snapshot!(content, @r#"
    // Generated by workertypes on 2024-01-01T00:00:00Z
    export {};
    declare global {
      const CACHE: KVNamespace;
      const API_HOST: "api.example.com";
      const RETRIES: 3;
      const ROOMS: DurableObjectNamespace;
      const ASSETS: R2Bucket;
    }

    declare module "*.txt" {
      const value: string;
      export default value;
    }
    "#);
}

#[test]
fn test_generation_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    writer(&first)
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap();
    writer(&second)
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap();

    assert_eq!(
        fs::read(first.path().join(DECLARATION_FILE)).unwrap(),
        fs::read(second.path().join(DECLARATION_FILE)).unwrap()
    );
}

#[test]
fn test_manifest_key_order_does_not_matter() {
    let reordered = r#"
        [[rules]]
        type = "Text"
        globs = ["**/*.txt"]

        [[r2_buckets]]
        binding = "ASSETS"

        [[durable_objects.bindings]]
        name = "ROOMS"
        class_name = "ChatRoom"

        [vars]
        API_HOST = "api.example.com"
        RETRIES = 3
    "#;
    let with_kv = format!(
        "kv_namespaces = [{{ binding = \"CACHE\", id = \"x\" }}]\n{}",
        reordered
    );

    assert_eq!(definitions(&with_kv), definitions(WRANGLER_TOML));
}

#[test]
fn test_empty_configuration_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut writer = writer(&temp);

    let outcome = writer
        .write(&definitions("name = \"empty\"\n"), ScriptFormat::Modules)
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Skipped);
    assert!(!temp.path().join(DECLARATION_FILE).exists());
    assert!(writer.into_sink().is_empty());
}

#[test]
fn test_foreign_file_is_never_overwritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DECLARATION_FILE);
    fs::write(&path, "interface Env { HAND_WRITTEN: string }\n").unwrap();

    let err = writer(&temp)
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap_err();

    assert!(matches!(err, Error::ForeignFile { path: p } if p == path));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "interface Env { HAND_WRITTEN: string }\n"
    );
}

#[test]
fn test_foreign_file_aborts_even_when_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(DECLARATION_FILE), "// mine\n").unwrap();

    let err = writer(&temp)
        .write(&TypeDefinitions::default(), ScriptFormat::Modules)
        .unwrap_err();

    assert!(matches!(err, Error::ForeignFile { .. }));
}

#[test]
fn test_foreign_file_in_parent_directory_aborts() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("packages").join("worker");
    fs::create_dir_all(&project).unwrap();
    fs::write(temp.path().join(DECLARATION_FILE), "declare const X: 1;\n").unwrap();

    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = DeclarationWriter::new(&project, NullSink)
        .generated_at(at)
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap_err();

    assert!(matches!(err, Error::ForeignFile { .. }));
    assert!(!project.join(DECLARATION_FILE).exists());
}

#[test]
fn test_non_utf8_foreign_file_is_reported_as_foreign() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DECLARATION_FILE);
    fs::write(&path, [0xffu8, 0xfe, 0x00, 0x41]).unwrap();

    let err = writer(&temp)
        .write(&TypeDefinitions::default(), ScriptFormat::Modules)
        .unwrap_err();

    assert!(matches!(err, Error::ForeignFile { path: p } if p == path));
    assert_eq!(fs::read(&path).unwrap(), [0xffu8, 0xfe, 0x00, 0x41]);
}

#[cfg(unix)]
#[test]
fn test_lookup_failure_is_fatal_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let not_a_dir = temp.path().join("wrangler.toml");
    fs::write(&not_a_dir, "").unwrap();
    let working_dir = not_a_dir.join("worker");

    let mut writer = DeclarationWriter::new(&working_dir, Vec::<String>::new());
    let err = writer
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!temp.path().join(DECLARATION_FILE).exists());
    assert_eq!(fs::read_to_string(&not_a_dir).unwrap(), "");
    assert!(writer.into_sink().is_empty());
}

#[test]
fn test_regeneration_overwrites_generated_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DECLARATION_FILE);

    writer(&temp)
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap();
    let outcome = writer(&temp)
        .write(&definitions("[vars]\nONLY = true\n"), ScriptFormat::Modules)
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Written(path.clone()));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(GENERATED_MARKER));
    assert!(content.contains("ONLY: true;"));
    assert!(!content.contains("CACHE"));
}

#[test]
fn test_empty_configuration_leaves_generated_file_alone() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DECLARATION_FILE);

    writer(&temp)
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let outcome = writer(&temp)
        .write(&TypeDefinitions::default(), ScriptFormat::Modules)
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Skipped);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_body_is_sent_to_sink() {
    let temp = TempDir::new().unwrap();
    let mut writer = writer(&temp);

    writer
        .write(&definitions(WRANGLER_TOML), ScriptFormat::Modules)
        .unwrap();

    let logged = writer.into_sink();
    assert_eq!(logged.len(), 1);
    assert!(logged[0].starts_with("interface Env {"));
    assert!(!logged[0].contains(GENERATED_MARKER));
}

#[test]
fn test_shapes_share_members() {
    let defs = definitions(WRANGLER_TOML);
    let temp = TempDir::new().unwrap();
    let writer = writer(&temp);

    let modules = writer.preview(&defs, ScriptFormat::Modules);
    let globals = writer.preview(&defs, ScriptFormat::ServiceWorker);

    for line in defs.env_lines() {
        assert!(modules.contains(&format!("  {}\n", line)));
        assert!(globals.contains(&format!("  const {}\n", line)));
    }
}
