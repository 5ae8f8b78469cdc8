//! Developer-facing diagnostics and the sinks that receive them.

use std::{cell::RefCell, fmt, rc::Rc};

use leptos::{provide_context, use_context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Diagnostic severity. Contract violations never escalate past a warning.
pub enum Severity {
    /// Non-fatal developer warning.
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Diagnostic categories.
pub enum DiagnosticKind {
    /// Prop not present in the documentation schema.
    UnknownProp,
    /// Required prop absent from the prop bag.
    MissingRequiredProp,
    /// Deprecated prop supplied.
    DeprecatedProp,
    /// Discriminator not registered; the default variant rendered instead.
    UnknownVariant,
}

impl DiagnosticKind {
    /// Returns the stable code for this category.
    pub const fn token(self) -> &'static str {
        match self {
            Self::UnknownProp => "unknown-prop",
            Self::MissingRequiredProp => "missing-required-prop",
            Self::DeprecatedProp => "deprecated-prop",
            Self::UnknownVariant => "unknown-variant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One developer warning about a component's usage.
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Display name of the component that produced the diagnostic.
    pub component_name: String,
    /// Category.
    pub kind: DiagnosticKind,
    /// Offending prop name, or the discriminator value for variant diagnostics.
    pub subject: String,
    /// Replacement prop for deprecated props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_by: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    fn warning(
        component_name: &str,
        kind: DiagnosticKind,
        subject: &str,
        replaced_by: Option<&str>,
        message: String,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            component_name: component_name.to_string(),
            kind,
            subject: subject.to_string(),
            replaced_by: replaced_by.map(str::to_string),
            message,
        }
    }

    /// Prop not documented for the component.
    pub fn unknown_prop(component_name: &str, prop: &str) -> Self {
        Self::warning(
            component_name,
            DiagnosticKind::UnknownProp,
            prop,
            None,
            format!("Unknown prop `{prop}` is not part of the documented prop surface."),
        )
    }

    /// Required prop missing.
    pub fn missing_required_prop(component_name: &str, prop: &str) -> Self {
        Self::warning(
            component_name,
            DiagnosticKind::MissingRequiredProp,
            prop,
            None,
            format!("Required prop `{prop}` was not provided."),
        )
    }

    /// Deprecated prop supplied, with its replacement when one is documented.
    pub fn deprecated_prop(component_name: &str, prop: &str, replaced_by: Option<&str>) -> Self {
        let message = match replaced_by {
            Some(replacement) => {
                format!("Prop `{prop}` is deprecated; use `{replacement}` instead.")
            }
            None => format!("Prop `{prop}` is deprecated."),
        };
        Self::warning(
            component_name,
            DiagnosticKind::DeprecatedProp,
            prop,
            replaced_by,
            message,
        )
    }

    /// Discriminator fell back to the default variant.
    pub fn unknown_variant(component_name: &str, discriminator: &str, fallback: &str) -> Self {
        Self::warning(
            component_name,
            DiagnosticKind::UnknownVariant,
            discriminator,
            None,
            format!("Variant `{discriminator}` is not registered; rendering `{fallback}` instead."),
        )
    }

    /// Compact code such as `missing-required-prop:title` or `deprecated-prop:foo→bar`.
    pub fn code(&self) -> String {
        match &self.replaced_by {
            Some(replacement) => format!("{}:{}→{}", self.kind.token(), self.subject, replacement),
            None => format!("{}:{}", self.kind.token(), self.subject),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.component_name, self.message)
    }
}

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    /// Reports one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink writing to the host warning stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, diagnostic: &Diagnostic) {
        leptos::logging::warn!("{diagnostic}");
    }
}

/// Sink that keeps diagnostics in memory, for tests and tooling.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drains everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }
}

/// Shared handle to a sink, stored in the reactive context.
#[derive(Clone)]
pub struct SinkHandle(Rc<dyn DiagnosticSink>);

impl SinkHandle {
    /// Wraps a sink.
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self(Rc::new(sink))
    }
}

impl Default for SinkHandle {
    fn default() -> Self {
        Self::new(ConsoleSink)
    }
}

impl DiagnosticSink for SinkHandle {
    fn report(&self, diagnostic: &Diagnostic) {
        self.0.report(diagnostic);
    }
}

/// Routes diagnostics from components below the current owner into `sink`.
pub fn provide_diagnostic_sink(sink: impl DiagnosticSink + 'static) {
    provide_context(SinkHandle::new(sink));
}

/// Returns the sink provided by an ancestor, or the console sink.
pub fn use_diagnostic_sink() -> SinkHandle {
    use_context::<SinkHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_prefixes_component_name() {
        let diagnostic = Diagnostic::missing_required_prop("PageHeader", "title");
        assert_eq!(
            diagnostic.to_string(),
            "[PageHeader] Required prop `title` was not provided."
        );
    }

    #[test]
    fn deprecated_codes_include_replacement_only_when_present() {
        let with = Diagnostic::deprecated_prop("PageHeader", "contentRight", Some("onRenderActions"));
        let without = Diagnostic::deprecated_prop("PageHeader", "legacy", None);

        assert_eq!(with.code(), "deprecated-prop:contentRight→onRenderActions");
        assert!(with.message.contains("onRenderActions"));
        assert_eq!(without.code(), "deprecated-prop:legacy");
        assert_eq!(without.replaced_by, None);
        assert_eq!(without.message, "Prop `legacy` is deprecated.");
    }

    #[test]
    fn collecting_sink_clones_share_a_buffer() {
        let sink = CollectingSink::new();
        let handle = SinkHandle::new(sink.clone());
        handle.report(&Diagnostic::unknown_prop("Files", "colour"));

        assert_eq!(sink.snapshot().len(), 1);
        assert_eq!(sink.take()[0].code(), "unknown-prop:colour");
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn serializes_with_kebab_case_kinds() {
        let value = serde_json::to_value(Diagnostic::unknown_variant("PageHeader", "hero", "base"))
            .expect("diagnostic serializes");
        assert_eq!(value["kind"], "unknown-variant");
        assert_eq!(value["severity"], "warning");
        assert_eq!(value["componentName"], "PageHeader");
        assert!(value.get("replacedBy").is_none());
    }
}
