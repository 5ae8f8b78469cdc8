use component_contract::{PropBag, RenderingStrategy, VARIANT_PROP};
use leptos::*;

use super::{completion, WelcomeMatTile};
use crate::icon::{Icon, IconCategory};

pub(super) struct Steps;
pub(super) struct InfoOnly;
pub(super) struct Splash;
pub(super) struct TrailheadConnected;

pub(super) static STEPS: Steps = Steps;
pub(super) static INFO_ONLY: InfoOnly = InfoOnly;
pub(super) static SPLASH: Splash = Splash;
pub(super) static TRAILHEAD_CONNECTED: TrailheadConnected = TrailheadConnected;

impl RenderingStrategy for Steps {
    fn render(&self, props: &PropBag) -> View {
        view! {
            {close_button(props)}
            <div class="ui-welcome-mat__content">
                {info_panel(props, Extras::Progress)}
                {tile_list(props, "steps")}
            </div>
        }
        .into_view()
    }
}

impl RenderingStrategy for InfoOnly {
    fn render(&self, props: &PropBag) -> View {
        view! {
            {close_button(props)}
            <div class="ui-welcome-mat__content">
                {info_panel(props, Extras::None)}
                {tile_list(props, "info-only")}
            </div>
        }
        .into_view()
    }
}

impl RenderingStrategy for Splash {
    fn render(&self, props: &PropBag) -> View {
        view! {
            {close_button(props)}
            <div class="ui-welcome-mat__content">
                {info_panel(props, Extras::Actions)}
            </div>
        }
        .into_view()
    }
}

impl RenderingStrategy for TrailheadConnected {
    fn render(&self, props: &PropBag) -> View {
        view! {
            {close_button(props)}
            <div class="ui-welcome-mat__content">
                {info_panel(props, Extras::Trailhead)}
                {tile_list(props, "trailhead-connected")}
            </div>
        }
        .into_view()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Extras {
    None,
    Progress,
    Actions,
    Trailhead,
}

fn close_button(props: &PropBag) -> Option<View> {
    let on_close = props.handler("onRequestClose")?;
    Some(
        view! {
            <button
                type="button"
                class="ui-welcome-mat__close"
                data-ui-slot="close"
                aria-label="Close"
                on:click=move |ev| on_close.call(ev)
            >
                <Icon category=IconCategory::Utility name="close" />
            </button>
        }
        .into_view(),
    )
}

fn info_panel(props: &PropBag, extras: Extras) -> View {
    let labels = props.records("labels").first();
    let title = labels.and_then(|labels| labels.view("title"));
    let description = labels.and_then(|labels| labels.view("description"));

    let progress = matches!(extras, Extras::Progress | Extras::Trailhead).then(|| {
        let (done, total) = completion(props);
        let suffix = labels
            .and_then(|labels| labels.text("completedLabel"))
            .unwrap_or("complete");
        view! {
            <div class="ui-welcome-mat__progress" data-ui-slot="progress">
                <span class="ui-text-body">{format!("{done} of {total} {suffix}")}</span>
                <progress max=total.to_string() value=done.to_string()></progress>
            </div>
        }
    });

    let trailhead = (extras == Extras::Trailhead).then(|| {
        let label = labels
            .and_then(|labels| labels.text("trailheadLabel"))
            .unwrap_or("Connected to Trailhead")
            .to_string();
        view! {
            <div class="ui-welcome-mat__trailhead" data-ui-slot="trailhead">
                <Icon category=IconCategory::Utility name="trailhead" />
                <span>{label}</span>
            </div>
        }
    });

    let actions = (extras == Extras::Actions)
        .then(|| props.view("onRenderInfoActions"))
        .flatten()
        .map(|actions| {
            view! { <div class="ui-welcome-mat__info-actions" data-ui-slot="actions">{actions}</div> }
        });

    view! {
        <div class="ui-welcome-mat__info" data-ui-slot="info">
            <h2 class="ui-welcome-mat__info-title">{title}</h2>
            <p class="ui-welcome-mat__info-description">{description}</p>
            {progress}
            {trailhead}
            {actions}
        </div>
    }
    .into_view()
}

// Tiles inherit the mat's layout unless they name one themselves.
fn tile_list(props: &PropBag, layout: &'static str) -> View {
    view! {
        <ul class="ui-welcome-mat__tiles" data-ui-slot="tiles">
            {props
                .records("children")
                .iter()
                .cloned()
                .map(|mut tile| {
                    if !tile.contains_key(VARIANT_PROP) {
                        tile.insert(VARIANT_PROP, layout);
                    }
                    view! { <li class="ui-welcome-mat__tile-item"><WelcomeMatTile props=tile /></li> }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
