//! Documentation schemas describing each component's intended prop surface.
//!
//! Schema documents are produced by the documentation pipeline and have the
//! shape:
//!
//! ```json
//! {
//!   "component": "PageHeader",
//!   "props": {
//!     "title": { "description": "...", "required": true, "type": "markup" },
//!     "contentRight": { "deprecated": true, "replacedBy": "onRenderActions" }
//!   }
//! }
//! ```
//!
//! Parsing is lenient about descriptor fields: a field with the wrong shape
//! falls back to its default rather than rejecting the document.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while reading a schema document.
pub enum SchemaError {
    /// The document is not JSON.
    #[error("schema document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The document has no `props` table.
    #[error("schema document has no `props` object")]
    MissingProps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Documentation for one prop.
pub struct PropDescriptor {
    /// Human-readable description.
    pub description: String,
    /// Whether callers must supply the prop.
    pub required: bool,
    /// Whether the prop is deprecated.
    pub deprecated: bool,
    /// Replacement prop name for deprecated entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_by: Option<String>,
    /// Semantic type tag used by other tooling.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
}

impl PropDescriptor {
    /// Optional prop with no special flags.
    pub fn optional() -> Self {
        Self::default()
    }

    /// Required prop.
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Deprecated prop with an optional replacement.
    pub fn deprecated(replaced_by: Option<&str>) -> Self {
        Self {
            deprecated: true,
            replaced_by: replaced_by.map(str::to_string),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            description: fields
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            required: fields
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            deprecated: fields
                .get("deprecated")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            replaced_by: fields
                .get("replacedBy")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            type_tag: type_tag(fields.get("type")),
        }
    }
}

// Accepts both `"type": "text"` and docgen-style `"type": { "name": "text" }`.
fn type_tag(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(tag) => Some(tag.clone()),
        Value::Object(fields) => fields.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Ordered prop documentation for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropSchema {
    component: Option<String>,
    entries: Vec<(String, PropDescriptor)>,
}

impl PropSchema {
    /// Empty schema. Validating against it yields no diagnostics.
    pub const fn new() -> Self {
        Self {
            component: None,
            entries: Vec::new(),
        }
    }

    /// Builder-style entry insert. Re-declaring a prop replaces it in place.
    pub fn prop(mut self, name: impl Into<String>, descriptor: PropDescriptor) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = descriptor,
            None => self.entries.push((name, descriptor)),
        }
        self
    }

    /// Parses a schema document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidJson`] for non-JSON input and
    /// [`SchemaError::MissingProps`] when the document has no `props` object.
    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(raw)?;
        let props = value
            .get("props")
            .and_then(Value::as_object)
            .ok_or(SchemaError::MissingProps)?;
        Ok(Self::from_parts(
            value.get("component").and_then(Value::as_str),
            props,
        ))
    }

    /// Parses a schema document, treating any failure as an absent schema.
    ///
    /// The failure is logged once through the host warning stream; callers
    /// receive an empty schema that produces no diagnostics.
    pub fn from_json_or_empty(component: &str, raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(schema) => schema,
            Err(err) => {
                leptos::logging::warn!("[{component}] prop documentation unavailable: {err}");
                Self::new()
            }
        }
    }

    fn from_parts(component: Option<&str>, props: &Map<String, Value>) -> Self {
        Self {
            component: component.map(str::to_string),
            entries: props
                .iter()
                .map(|(name, value)| (name.clone(), PropDescriptor::from_value(value)))
                .collect(),
        }
    }

    /// Component name declared by the document, if any.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Returns the descriptor for `name`.
    pub fn get(&self, name: &str) -> Option<&PropDescriptor> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Iterates descriptors in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropDescriptor)> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Returns whether the schema documents no props.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of documented props.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
