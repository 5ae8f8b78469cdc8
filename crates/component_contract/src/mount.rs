//! Mount-time glue tying the validator and dispatcher to the reactive owner.

use std::rc::Rc;

use leptos::on_cleanup;

use crate::{
    use_contract_config, use_diagnostic_sink, ContractConfig, Diagnostic, DiagnosticSink, Match,
    MountCheck, PropBag, PropSchema, VariantRegistry,
};

/// Checks `props` against `schema` for the component instance being mounted.
///
/// Diagnostics go to the sink provided through context (console by default).
/// Does nothing when prop validation is disabled.
///
/// A Leptos component body runs once per mount, so calling this from the body
/// checks each instance once. The returned handle is that instance's flag:
/// code that can run again during the same mount (a reactive closure, say)
/// should keep the handle and go through [`MountCheck::check`], which stays a
/// no-op until the owner is cleaned up and the flag is reset.
pub fn validate_on_mount(
    component_name: &str,
    props: &PropBag,
    schema: &PropSchema,
) -> Rc<MountCheck> {
    let check = Rc::new(MountCheck::new());
    if !check_with(
        &check,
        use_contract_config(),
        &use_diagnostic_sink(),
        component_name,
        props,
        schema,
    ) {
        return check;
    }

    let unmounted = Rc::clone(&check);
    on_cleanup(move || unmounted.reset());
    check
}

// Returns whether validation is enabled under `config`.
fn check_with(
    check: &MountCheck,
    config: ContractConfig,
    sink: &dyn DiagnosticSink,
    component_name: &str,
    props: &PropBag,
    schema: &PropSchema,
) -> bool {
    if !config.validate_props {
        return false;
    }
    check.check(component_name, props, schema, sink);
    true
}

/// Reports a discriminator that fell back to the registry default, when enabled.
///
/// Resolution itself stays silent; this is the component-level hook for the
/// development-only warning.
pub fn report_unknown_variant(
    component_name: &str,
    registry: &VariantRegistry,
    discriminator: &str,
) -> Option<Diagnostic> {
    unknown_variant_with(
        use_contract_config(),
        &use_diagnostic_sink(),
        component_name,
        registry,
        discriminator,
    )
}

fn unknown_variant_with(
    config: ContractConfig,
    sink: &dyn DiagnosticSink,
    component_name: &str,
    registry: &VariantRegistry,
    discriminator: &str,
) -> Option<Diagnostic> {
    if !config.report_unknown_variants {
        return None;
    }
    if registry.resolve_detailed(discriminator).matched != Match::Fallback {
        return None;
    }

    let diagnostic =
        Diagnostic::unknown_variant(component_name, discriminator, registry.default_variant());
    sink.report(&diagnostic);
    Some(diagnostic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        provide_contract_config, provide_diagnostic_sink, CollectingSink, PropDescriptor,
        RenderingStrategy, VariantSpec,
    };
    use leptos::{create_runtime, IntoView, View};
    use pretty_assertions::assert_eq;

    struct Empty;

    impl RenderingStrategy for Empty {
        fn render(&self, _props: &PropBag) -> View {
            ().into_view()
        }
    }

    static EMPTY: Empty = Empty;

    fn registry() -> VariantRegistry {
        VariantRegistry::builder("page-header", VariantSpec::new("base", &EMPTY))
            .variant(VariantSpec::new("record-home", &EMPTY))
            .alias("recordHome", "record-home")
            .build()
            .expect("registry tables are consistent")
    }

    fn schema() -> PropSchema {
        PropSchema::new()
            .prop("title", PropDescriptor::required())
            .prop("foo", PropDescriptor::deprecated(Some("bar")))
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<String> {
        diagnostics.iter().map(Diagnostic::code).collect()
    }

    #[test]
    fn development_config_reports_once_per_kept_handle() {
        let sink = CollectingSink::new();
        let check = MountCheck::new();
        let props = PropBag::new().with("foo", "x");

        for _ in 0..2 {
            assert!(check_with(
                &check,
                ContractConfig::development(),
                &sink,
                "PageHeader",
                &props,
                &schema(),
            ));
        }

        assert!(check.is_checked());
        assert_eq!(
            codes(&sink.take()),
            vec!["missing-required-prop:title", "deprecated-prop:foo→bar"]
        );
    }

    #[test]
    fn production_config_skips_validation() {
        let sink = CollectingSink::new();
        let check = MountCheck::new();

        assert!(!check_with(
            &check,
            ContractConfig::production(),
            &sink,
            "PageHeader",
            &PropBag::new(),
            &schema(),
        ));
        assert!(!check.is_checked());
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn unknown_variant_reported_only_for_fallbacks() {
        let registry = registry();
        let sink = CollectingSink::new();
        let dev = ContractConfig::development();

        assert_eq!(unknown_variant_with(dev, &sink, "PageHeader", &registry, "record-home"), None);
        assert_eq!(unknown_variant_with(dev, &sink, "PageHeader", &registry, "recordHome"), None);
        let reported = unknown_variant_with(dev, &sink, "PageHeader", &registry, "hero")
            .map(|diagnostic| diagnostic.code());
        assert_eq!(reported.as_deref(), Some("unknown-variant:hero"));
        assert_eq!(
            unknown_variant_with(ContractConfig::production(), &sink, "PageHeader", &registry, "hero"),
            None
        );
        assert_eq!(codes(&sink.take()), vec!["unknown-variant:hero"]);
    }

    #[test]
    fn default_config_follows_build_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(ContractConfig::default(), ContractConfig::development());
        } else {
            assert_eq!(ContractConfig::default(), ContractConfig::production());
        }
    }

    #[test]
    fn provided_sink_and_config_reach_components() {
        let runtime = create_runtime();
        let sink = CollectingSink::new();
        provide_diagnostic_sink(sink.clone());

        let check = validate_on_mount("PageHeader", &PropBag::new(), &schema());
        assert_eq!(check.is_checked(), cfg!(debug_assertions));
        assert_eq!(report_unknown_variant("PageHeader", &registry(), "recordHome"), None);
        assert_eq!(
            report_unknown_variant("PageHeader", &registry(), "hero").is_some(),
            cfg!(debug_assertions)
        );
        if cfg!(debug_assertions) {
            assert_eq!(
                codes(&sink.take()),
                vec!["missing-required-prop:title", "unknown-variant:hero"]
            );
        }

        provide_contract_config(ContractConfig::production());
        let check = validate_on_mount("PageHeader", &PropBag::new(), &schema());
        assert!(!check.is_checked());
        assert_eq!(report_unknown_variant("PageHeader", &registry(), "hero"), None);
        assert!(sink.snapshot().is_empty());

        runtime.dispose();
    }
}
