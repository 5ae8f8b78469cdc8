use component_contract::{validate_on_mount, ClassNames, PropBag, CLASS_NAME_PROP, VARIANT_PROP};
use leptos::*;

use crate::constants::WELCOME_MAT_TILE;
use crate::docs::prop_schema;
use crate::icon::{Icon, IconCategory};

// Info-only mats list tiles without tracking progress.
fn tracks_progress(props: &PropBag) -> bool {
    props.text(VARIANT_PROP) != Some("info-only")
}

fn tile_class(props: &PropBag) -> String {
    let complete = props.flag("isComplete") && tracks_progress(props);
    ClassNames::new("ui-welcome-mat__tile")
        .with_if(!tracks_progress(props), "ui-welcome-mat__tile_info-only")
        .with_if(complete, "ui-welcome-mat__tile_complete")
        .with_extra(props.text(CLASS_NAME_PROP))
        .to_string()
}

#[component]
/// One onboarding step. Renders as a link when `href` is present.
pub fn WelcomeMatTile(
    /// Caller props.
    #[prop(optional)]
    props: PropBag,
) -> impl IntoView {
    validate_on_mount(WELCOME_MAT_TILE, &props, prop_schema(WELCOME_MAT_TILE));

    let class = tile_class(&props);
    let complete = props.flag("isComplete") && tracks_progress(&props);
    let icon_name = props.text("icon").unwrap_or("knowledge_base").to_string();
    let on_click = props.handler("onClick");
    let handle_click = move |ev: ev::MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    let body = view! {
        <div class="ui-media">
            <div class="ui-media__figure">
                <Icon category=IconCategory::Utility name=icon_name ui_slot="icon" />
                {complete.then(|| view! {
                    <Icon category=IconCategory::Action name="check" ui_slot="complete-badge" />
                })}
            </div>
            <div class="ui-media__body">
                <h3 class="ui-welcome-mat__tile-title">{props.view("title")}</h3>
                <p class="ui-welcome-mat__tile-description">{props.view("description")}</p>
            </div>
        </div>
    };

    match props.text("href") {
        Some(href) => view! {
            <a
                class=class
                href=href.to_string()
                data-ui-kind="welcome-mat-tile"
                data-ui-state=if complete { "complete" } else { "pending" }
                on:click=handle_click
            >
                {body}
            </a>
        }
        .into_view(),
        None => view! {
            <div
                class=class
                data-ui-kind="welcome-mat-tile"
                data-ui-state=if complete { "complete" } else { "pending" }
                on:click=handle_click
            >
                {body}
            </div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_contract::{validate, Diagnostic};
    use pretty_assertions::assert_eq;

    #[test]
    fn complete_tiles_gain_modifier_before_caller_classes() {
        let props = PropBag::new()
            .with("isComplete", true)
            .with(CLASS_NAME_PROP, "onboarding");
        assert_eq!(
            tile_class(&props),
            "ui-welcome-mat__tile ui-welcome-mat__tile_complete onboarding"
        );
        assert_eq!(tile_class(&PropBag::new()), "ui-welcome-mat__tile");
    }

    #[test]
    fn info_only_tiles_ignore_completion() {
        let props = PropBag::new()
            .with("isComplete", true)
            .with(VARIANT_PROP, "info-only");
        assert_eq!(
            tile_class(&props),
            "ui-welcome-mat__tile ui-welcome-mat__tile_info-only"
        );
    }

    #[test]
    fn tiles_without_title_are_reported() {
        let props = PropBag::new()
            .with("description", "Tailor your cases to your team's workflow.")
            .with("href", "#views");
        let diagnostics = validate(WELCOME_MAT_TILE, &props, prop_schema(WELCOME_MAT_TILE));
        assert_eq!(
            diagnostics.iter().map(Diagnostic::code).collect::<Vec<_>>(),
            vec!["missing-required-prop:title"]
        );
    }
}
