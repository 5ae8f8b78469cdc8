use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ComponentManifest {
    schema_version: u32,
    component: Vec<ComponentEntry>,
}

#[derive(Debug, Deserialize)]
struct ComponentEntry {
    name: String,
    constant: String,
    docs: String,
}

fn check_document(entry: &ComponentEntry, path: &Path, doc: &Value) {
    let declared = doc.get("component").and_then(Value::as_str);
    if declared != Some(entry.name.as_str()) {
        panic!(
            "component mismatch in {}: expected {} found {:?}",
            path.display(),
            entry.name,
            declared
        );
    }

    let props = doc
        .get("props")
        .and_then(Value::as_object)
        .unwrap_or_else(|| panic!("{} has no `props` object", path.display()));

    for (name, descriptor) in props {
        let Some(replacement) = descriptor.get("replacedBy").and_then(Value::as_str) else {
            continue;
        };
        if !props.contains_key(replacement) {
            panic!(
                "{}: `{name}` is replaced by undocumented prop `{replacement}`",
                path.display()
            );
        }
        if descriptor.get("deprecated").and_then(Value::as_bool) != Some(true) {
            panic!(
                "{}: `{name}` names a replacement but is not deprecated",
                path.display()
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let manifest_path = crate_root.join("components.toml");
    println!("cargo:rerun-if-changed={}", manifest_path.display());

    let raw = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", manifest_path.display()));
    let manifest: ComponentManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", manifest_path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            manifest_path.display(),
            manifest.schema_version
        );
    }

    let mut generated = String::new();
    let mut catalog = Vec::new();
    for entry in &manifest.component {
        let path = crate_root.join(&entry.docs);
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let doc: Value = serde_json::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        check_document(entry, &path, &doc);

        let compact = serde_json::to_string(&doc).expect("serialize component doc");
        generated.push_str(&format!(
            "/// Build-time embedded prop documentation for `{}`.\n\
pub const {}_DOC_JSON: &str = r##\"{}\"##;\n",
            entry.name, entry.constant, compact
        ));
        catalog.push(format!("(\"{}\", {}_DOC_JSON)", entry.name, entry.constant));
    }

    generated.push_str(&format!(
        "/// Component name and prop documentation pairs, in manifest order.\n\
pub const COMPONENT_DOCS: &[(&str, &str)] = &[{}];\n",
        catalog.join(", ")
    ));

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("component_docs_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
