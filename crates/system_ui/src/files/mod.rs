//! File cards and the grid that lays them out.
//!
//! `crop` selects the preview aspect ratio through the same variant table
//! machinery the other components use. All ratios share one card layout and
//! differ only in their container modifier.

use std::sync::OnceLock;

use component_contract::{
    report_unknown_variant, validate_on_mount, ClassNames, PropBag, VariantRegistry, VariantSpec,
    CLASS_NAME_PROP,
};
use leptos::*;

use crate::constants::{FILE, FILES};
use crate::docs::prop_schema;

mod card;

/// Prop carrying the preview aspect ratio.
pub const CROP_PROP: &str = "crop";

/// Aspect ratio used when `crop` is absent or unregistered.
pub const DEFAULT_CROP: &str = "16-by-9";

/// Crop table for [`File`].
pub fn file_crops() -> &'static VariantRegistry {
    static REGISTRY: OnceLock<VariantRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        VariantRegistry::builder("file", VariantSpec::new(DEFAULT_CROP, &card::CARD))
            .variant(VariantSpec::new("4-by-3", &card::CARD).with_state_class())
            .variant(VariantSpec::new("1-by-1", &card::CARD).with_state_class())
            .build()
            .expect("file crop table should be consistent")
    })
}

/// Display title, falling back to the legacy `labels[0].title`.
pub fn file_title(props: &PropBag) -> Option<&str> {
    props.text("title").or_else(|| {
        props
            .records("labels")
            .first()
            .and_then(|labels| labels.text("title"))
    })
}

#[component]
/// One file preview card.
pub fn File(
    /// Caller props.
    #[prop(optional)]
    props: PropBag,
) -> impl IntoView {
    validate_on_mount(FILE, &props, prop_schema(FILE));

    let registry = file_crops();
    let crop = props.text(CROP_PROP).unwrap_or(DEFAULT_CROP);
    report_unknown_variant(FILE, registry, crop);
    registry.render(crop, &props)
}

fn grid_class(props: &PropBag) -> String {
    ClassNames::new("ui-files")
        .with_extra(props.text(CLASS_NAME_PROP))
        .to_string()
}

#[component]
/// Grid of [`File`] cards built from the `children` records.
pub fn Files(
    /// Caller props.
    #[prop(optional)]
    props: PropBag,
) -> impl IntoView {
    validate_on_mount(FILES, &props, prop_schema(FILES));

    view! {
        <ul class=grid_class(&props) data-ui-primitive="true" data-ui-kind="files">
            {props
                .records("children")
                .iter()
                .cloned()
                .map(|file| view! { <li class="ui-files__item"><File props=file /></li> })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_contract::{validate, Diagnostic, Match};
    use pretty_assertions::assert_eq;

    #[test]
    fn crops_share_one_layout_and_flag_non_default_ratios() {
        let registry = file_crops();
        let props = PropBag::new().with(CLASS_NAME_PROP, "gallery");

        assert_eq!(
            registry.container_classes("16-by-9", &props).to_string(),
            "ui-file gallery"
        );
        assert_eq!(
            registry.container_classes("1-by-1", &props).to_string(),
            "ui-file ui-file_1-by-1 gallery"
        );
        assert_eq!(registry.resolve_detailed("square").matched, Match::Fallback);
        assert_eq!(registry.canonical_name("4-by-3"), "4-by-3");
    }

    #[test]
    fn legacy_labels_supply_the_title() {
        let legacy = PropBag::new().with(
            "labels",
            vec![PropBag::new().with("title", "Proposal.pdf")],
        );
        assert_eq!(file_title(&legacy), Some("Proposal.pdf"));

        let both = legacy.clone().with("title", "Final.pdf");
        assert_eq!(file_title(&both), Some("Final.pdf"));
        assert_eq!(file_title(&PropBag::new()), None);
    }

    #[test]
    fn legacy_labels_are_reported_as_deprecated() {
        let props = PropBag::new().with(
            "labels",
            vec![PropBag::new().with("title", "Proposal.pdf")],
        );
        let codes = validate(FILE, &props, prop_schema(FILE))
            .iter()
            .map(Diagnostic::code)
            .collect::<Vec<_>>();
        assert_eq!(
            codes,
            vec!["missing-required-prop:title", "deprecated-prop:labels→title"]
        );
    }

    #[test]
    fn grid_appends_caller_classes() {
        assert_eq!(grid_class(&PropBag::new()), "ui-files");
        assert_eq!(
            grid_class(&PropBag::new().with(CLASS_NAME_PROP, "ui-p-around_medium")),
            "ui-files ui-p-around_medium"
        );
    }
}
