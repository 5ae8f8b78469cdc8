//! Embedded prop documentation, parsed once per process.

use std::sync::OnceLock;

use component_contract::PropSchema;

include!(concat!(env!("OUT_DIR"), "/component_docs_generated.rs"));

static EMPTY_SCHEMA: PropSchema = PropSchema::new();

fn schemas() -> &'static [(&'static str, PropSchema)] {
    static SCHEMAS: OnceLock<Vec<(&'static str, PropSchema)>> = OnceLock::new();
    SCHEMAS.get_or_init(|| {
        COMPONENT_DOCS
            .iter()
            .map(|(name, raw)| (*name, PropSchema::from_json_or_empty(name, raw)))
            .collect()
    })
}

/// Returns the prop schema documented for `component`.
///
/// Components without documentation get an empty schema, which validates
/// nothing.
pub fn prop_schema(component: &str) -> &'static PropSchema {
    schemas()
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, schema)| schema)
        .unwrap_or(&EMPTY_SCHEMA)
}

/// Returns the raw documentation JSON for `component`.
pub fn prop_documentation_json(component: &str) -> Option<&'static str> {
    COMPONENT_DOCS
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, raw)| *raw)
}
