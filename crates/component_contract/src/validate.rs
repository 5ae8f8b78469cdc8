//! Schema-driven prop validation.

use std::cell::Cell;

use crate::{Diagnostic, DiagnosticSink, PropBag, PropSchema};

/// Compares `props` against `schema` and returns the resulting diagnostics.
///
/// Missing required props are reported first, in schema order, followed by
/// unknown and deprecated props in the order the caller supplied them. Each
/// offending key produces at most one diagnostic. An empty schema is treated
/// as absent documentation and yields nothing.
pub fn validate(component_name: &str, props: &PropBag, schema: &PropSchema) -> Vec<Diagnostic> {
    if schema.is_empty() {
        return Vec::new();
    }

    let mut diagnostics = Vec::new();

    for (name, descriptor) in schema.iter() {
        if descriptor.required && !props.contains_key(name) {
            diagnostics.push(Diagnostic::missing_required_prop(component_name, name));
        }
    }

    for name in props.keys() {
        match schema.get(name) {
            None => diagnostics.push(Diagnostic::unknown_prop(component_name, name)),
            Some(descriptor) if descriptor.deprecated => diagnostics.push(
                Diagnostic::deprecated_prop(component_name, name, descriptor.replaced_by.as_deref()),
            ),
            Some(_) => {}
        }
    }

    diagnostics
}

/// Runs [`validate`] and reports every diagnostic to `sink`.
///
/// Returns the reported diagnostics so callers can assert on them.
pub fn check_props(
    component_name: &str,
    props: &PropBag,
    schema: &PropSchema,
    sink: &dyn DiagnosticSink,
) -> Vec<Diagnostic> {
    let diagnostics = validate(component_name, props, schema);
    for diagnostic in &diagnostics {
        sink.report(diagnostic);
    }
    diagnostics
}

/// Per-instance flag limiting prop checks to one pass per mount.
#[derive(Debug, Default)]
pub struct MountCheck {
    checked: Cell<bool>,
}

impl MountCheck {
    /// Creates a flag for a freshly mounted instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs [`check_props`] on the first call after mount; later calls are no-ops.
    pub fn check(
        &self,
        component_name: &str,
        props: &PropBag,
        schema: &PropSchema,
        sink: &dyn DiagnosticSink,
    ) -> Vec<Diagnostic> {
        if self.checked.replace(true) {
            return Vec::new();
        }
        check_props(component_name, props, schema, sink)
    }

    /// Returns whether this instance has already been checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Clears the flag when the instance unmounts.
    pub fn reset(&self) {
        self.checked.set(false);
    }
}
