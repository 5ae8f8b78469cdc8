//! Page header component.
//!
//! The `variant` prop picks one of four layouts. Camel-cased spellings from
//! earlier releases (`objectHome`, `recordHome`, `relatedList`) stay
//! registered as aliases and render exactly like their hyphenated forms.
//! Unregistered values render the `base` layout.

use std::sync::OnceLock;

use component_contract::{
    report_unknown_variant, validate_on_mount, PropBag, VariantRegistry, VariantSpec, VARIANT_PROP,
};
use leptos::*;

use crate::constants::PAGE_HEADER;
use crate::docs::prop_schema;

mod parts;
mod variants;

pub use parts::{PageHeaderDetailBlock, PageHeaderDetailRow, PageHeaderInfo, PageHeaderTitle};

/// Layout used when `variant` is absent or unregistered.
pub const DEFAULT_VARIANT: &str = "base";

/// Variant table for [`PageHeader`].
pub fn page_header_variants() -> &'static VariantRegistry {
    static REGISTRY: OnceLock<VariantRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        VariantRegistry::builder(
            "page-header",
            VariantSpec::new(DEFAULT_VARIANT, &variants::BASE),
        )
        .variant(VariantSpec::new("object-home", &variants::OBJECT_HOME))
        .variant(VariantSpec::new("record-home", &variants::RECORD_HOME).with_state_class())
        .variant(VariantSpec::new("related-list", &variants::RELATED_LIST).with_state_class())
        .alias("objectHome", "object-home")
        .alias("recordHome", "record-home")
        .alias("relatedList", "related-list")
        .build()
        .expect("page header variant table should be consistent")
    })
}

fn discriminator(props: &PropBag) -> &str {
    props.text(VARIANT_PROP).unwrap_or(DEFAULT_VARIANT)
}

#[component]
/// Page header rendered from a prop bag.
///
/// Props are checked against the documented schema once per mount in
/// development builds; violations are reported, never enforced.
pub fn PageHeader(
    /// Caller props, passed unmodified to the selected layout.
    #[prop(optional)]
    props: PropBag,
) -> impl IntoView {
    validate_on_mount(PAGE_HEADER, &props, prop_schema(PAGE_HEADER));

    let registry = page_header_variants();
    let variant = discriminator(&props);
    report_unknown_variant(PAGE_HEADER, registry, variant);
    registry.render(variant, &props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_contract::{validate, Diagnostic, Match, CLASS_NAME_PROP};
    use pretty_assertions::assert_eq;

    fn codes(props: &PropBag) -> Vec<String> {
        validate(PAGE_HEADER, props, prop_schema(PAGE_HEADER))
            .iter()
            .map(Diagnostic::code)
            .collect()
    }

    #[test]
    fn legacy_spellings_match_hyphenated_variants() {
        let registry = page_header_variants();
        let props = PropBag::new()
            .with("title", "Acme")
            .with(CLASS_NAME_PROP, "record-header");

        for (legacy, canonical) in [
            ("objectHome", "object-home"),
            ("recordHome", "record-home"),
            ("relatedList", "related-list"),
        ] {
            let via_legacy = registry.resolve_detailed(legacy);
            assert_eq!(via_legacy.matched, Match::Alias);
            assert_eq!(via_legacy.canonical, canonical);
            assert_eq!(
                registry.container_classes(legacy, &props),
                registry.container_classes(canonical, &props)
            );
        }
    }

    #[test]
    fn record_home_and_related_list_carry_state_classes() {
        let registry = page_header_variants();
        let props = PropBag::new().with(
            "details",
            vec![PropBag::new().with("label", "Owner").with("content", "Jane")],
        );

        assert_eq!(
            registry.container_classes("related-list", &props).to_string(),
            "ui-page-header ui-page-header_related-list"
        );
        assert_eq!(
            registry.container_classes("relatedList", &props).to_string(),
            "ui-page-header ui-page-header_related-list"
        );
        assert_eq!(
            registry.container_classes("recordHome", &props).to_string(),
            "ui-page-header ui-page-header_record-home"
        );
        assert_eq!(
            registry.container_classes("object-home", &props).to_string(),
            "ui-page-header"
        );
        assert_eq!(registry.resolve_detailed("relatedList").canonical, "related-list");
    }

    #[test]
    fn missing_or_unknown_variant_renders_base() {
        let registry = page_header_variants();
        assert_eq!(discriminator(&PropBag::new()), "base");
        assert_eq!(registry.resolve_detailed(discriminator(&PropBag::new())).matched, Match::Canonical);

        let unknown = PropBag::new().with(VARIANT_PROP, "hero");
        assert_eq!(registry.resolve_detailed(discriminator(&unknown)).canonical, "base");
        assert_eq!(registry.resolve_detailed(discriminator(&unknown)).matched, Match::Fallback);

        let not_text = PropBag::new().with(VARIANT_PROP, true);
        assert_eq!(discriminator(&not_text), "base");
    }

    #[test]
    fn legacy_slots_are_reported_with_replacements() {
        let props = PropBag::new()
            .with("title", "Leads")
            .with("contentRight", "New")
            .with("navRight", "Filter");

        assert_eq!(
            codes(&props),
            vec![
                "deprecated-prop:contentRight→onRenderActions",
                "deprecated-prop:navRight→onRenderControls",
            ]
        );
    }

    #[test]
    fn documented_props_pass_quietly() {
        let props = PropBag::new()
            .with(VARIANT_PROP, "recordHome")
            .with("title", "Acme")
            .with("label", "Account")
            .with("iconName", "account")
            .with("details", Vec::<PropBag>::new());

        assert!(codes(&props).is_empty());
    }

    #[test]
    fn undocumented_props_are_flagged_in_caller_order() {
        let props = PropBag::new()
            .with("subtitle", "x")
            .with("title", "Acme")
            .with("headerStyle", "bold");

        assert_eq!(
            codes(&props),
            vec!["unknown-prop:subtitle", "unknown-prop:headerStyle"]
        );
    }
}
