//! Welcome mat: an onboarding surface listing guided steps as tiles.

use std::sync::OnceLock;

use component_contract::{
    report_unknown_variant, validate_on_mount, PropBag, PropValue, VariantRegistry, VariantSpec,
    VARIANT_PROP,
};
use leptos::*;

use crate::constants::WELCOME_MAT;
use crate::docs::prop_schema;

mod tile;
mod variants;

pub use tile::WelcomeMatTile;

/// Layout used when `variant` is absent or unregistered.
pub const DEFAULT_VARIANT: &str = "steps";

/// Variant table for [`WelcomeMat`].
pub fn welcome_mat_variants() -> &'static VariantRegistry {
    static REGISTRY: OnceLock<VariantRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        VariantRegistry::builder(
            "welcome-mat",
            VariantSpec::new(DEFAULT_VARIANT, &variants::STEPS),
        )
        .variant(VariantSpec::new("info-only", &variants::INFO_ONLY).with_state_class())
        .variant(VariantSpec::new("splash", &variants::SPLASH).with_state_class())
        .variant(
            VariantSpec::new("trailhead-connected", &variants::TRAILHEAD_CONNECTED)
                .with_state_class(),
        )
        .build()
        .expect("welcome mat variant table should be consistent")
    })
}

/// Completed and total step counts across the `children` tile records.
pub fn completion(props: &PropBag) -> (usize, usize) {
    let tiles = props.records("children");
    let done = tiles.iter().filter(|tile| tile.flag("isComplete")).count();
    (done, tiles.len())
}

fn is_open(props: &PropBag) -> bool {
    !matches!(props.get("isOpen"), Some(PropValue::Flag(false)))
}

#[component]
/// Welcome mat rendered from a prop bag. Renders nothing when `isOpen` is false.
pub fn WelcomeMat(
    /// Caller props, passed unmodified to the selected layout.
    #[prop(optional)]
    props: PropBag,
) -> impl IntoView {
    validate_on_mount(WELCOME_MAT, &props, prop_schema(WELCOME_MAT));
    if !is_open(&props) {
        return ().into_view();
    }

    let registry = welcome_mat_variants();
    let variant = props.text(VARIANT_PROP).unwrap_or(DEFAULT_VARIANT);
    report_unknown_variant(WELCOME_MAT, registry, variant);
    registry.render(variant, &props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_contract::{validate, Diagnostic, Match};
    use pretty_assertions::assert_eq;

    fn tile(title: &str, complete: bool) -> PropBag {
        PropBag::new()
            .with("title", title)
            .with("icon", "call")
            .with("isComplete", complete)
    }

    #[test]
    fn counts_completed_tiles() {
        let props = PropBag::new().with(
            "children",
            vec![
                tile("Welcome to Salesforce!", true),
                tile("Learn About OpenCTI!", true),
                tile("Power Up the Utility Bar", false),
            ],
        );
        assert_eq!(completion(&props), (2, 3));
        assert_eq!(completion(&PropBag::new()), (0, 0));
    }

    #[test]
    fn only_explicit_false_closes_the_mat() {
        assert!(is_open(&PropBag::new()));
        assert!(is_open(&PropBag::new().with("isOpen", true)));
        assert!(is_open(&PropBag::new().with("isOpen", "no")));
        assert!(!is_open(&PropBag::new().with("isOpen", false)));
    }

    #[test]
    fn layouts_resolve_without_aliases() {
        let registry = welcome_mat_variants();
        assert_eq!(registry.aliases().count(), 0);
        assert_eq!(registry.resolve_detailed("infoOnly").matched, Match::Fallback);
        assert_eq!(registry.resolve_detailed("infoOnly").canonical, "steps");
        assert!(registry.derive_state_classes("steps").is_empty());
        assert_eq!(
            registry.derive_state_classes("trailhead-connected"),
            vec!["ui-welcome-mat_trailhead-connected".to_string()]
        );
    }

    #[test]
    fn labels_are_required() {
        let diagnostics = validate(
            WELCOME_MAT,
            &PropBag::new().with(VARIANT_PROP, "splash"),
            prop_schema(WELCOME_MAT),
        );
        assert_eq!(
            diagnostics.iter().map(Diagnostic::code).collect::<Vec<_>>(),
            vec!["missing-required-prop:labels"]
        );
    }
}
