//! Page header building blocks shared by the layout strategies.
//!
//! The four components here are public for callers composing custom headers.
//! They are thin and may change with the layouts.

use component_contract::PropBag;
use leptos::*;

use crate::icon::{Icon, IconCategory};

#[component]
/// Page header title heading.
pub fn PageHeaderTitle(
    /// Hover text, usually the plain-text title.
    #[prop(default = None)]
    tooltip: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h1 class="ui-page-header__title ui-truncate" data-ui-slot="title" title=tooltip>
            {children()}
        </h1>
    }
}

#[component]
/// Secondary text under the title.
pub fn PageHeaderInfo(children: Children) -> impl IntoView {
    view! {
        <div class="ui-page-header__meta-text" data-ui-slot="info">
            {children()}
        </div>
    }
}

#[component]
/// Row of detail blocks.
pub fn PageHeaderDetailRow(details: Vec<PropBag>) -> impl IntoView {
    view! {
        <ul class="ui-page-header__detail-row" data-ui-slot="details">
            {details
                .into_iter()
                .map(|detail| view! { <PageHeaderDetailBlock detail=detail /> })
                .collect_view()}
        </ul>
    }
}

#[component]
/// One labelled detail. Reads `label`, `content`, and `truncate` from the record.
pub fn PageHeaderDetailBlock(detail: PropBag) -> impl IntoView {
    let content_class = if detail.flag("truncate") {
        "ui-text-body ui-truncate"
    } else {
        "ui-text-body"
    };
    let label_tooltip = detail.text("label").map(str::to_string);
    let content_tooltip = detail.text("content").map(str::to_string);

    view! {
        <li class="ui-page-header__detail-block" data-ui-slot="detail">
            <div class="ui-text-title ui-truncate" title=label_tooltip>
                {detail.view("label")}
            </div>
            <div class=content_class title=content_tooltip>
                {detail.view("content")}
            </div>
        </li>
    }
}

pub(super) fn figure(props: &PropBag) -> Option<View> {
    let icon = props.view("icon").or_else(|| {
        let name = props.text("iconName")?.to_string();
        let category = props
            .text("iconCategory")
            .and_then(IconCategory::from_token)
            .unwrap_or_default();
        Some(
            view! {
                <Icon
                    category=category
                    name=name
                    size=props.text("iconSize").map(str::to_string)
                    variant=props.text("iconVariant").map(str::to_string)
                    position=props.text("iconPosition").map(str::to_string)
                />
            }
            .into_view(),
        )
    })?;

    Some(
        view! {
            <div class="ui-media__figure" data-ui-slot="figure">{icon}</div>
        }
        .into_view(),
    )
}

// Breadcrumb trail when records are supplied, otherwise the plain label.
pub(super) fn label(props: &PropBag) -> Option<View> {
    let trail = props.records("trail");
    if !trail.is_empty() {
        let crumbs = trail
            .iter()
            .map(|crumb| {
                let href = crumb.text("href").map(str::to_string);
                view! {
                    <li class="ui-breadcrumb__item">
                        <a href=href>{crumb.view("label")}</a>
                    </li>
                }
            })
            .collect_view();
        return Some(
            view! {
                <nav aria-label="Breadcrumbs" data-ui-slot="trail">
                    <ol class="ui-breadcrumb">{crumbs}</ol>
                </nav>
            }
            .into_view(),
        );
    }

    props.view("label").map(|label| {
        view! { <span class="ui-page-header__label" data-ui-slot="label">{label}</span> }
            .into_view()
    })
}

pub(super) fn title(props: &PropBag) -> Option<View> {
    let tooltip = props.text("title").map(str::to_string);
    props.view("title").map(|title| {
        view! { <PageHeaderTitle tooltip=tooltip>{title}</PageHeaderTitle> }.into_view()
    })
}

pub(super) fn name_switcher(props: &PropBag) -> Option<View> {
    props.view("nameSwitcherDropdown").map(|dropdown| {
        view! {
            <div class="ui-page-header__name-switcher" data-ui-slot="name-switcher">
                {dropdown}
            </div>
        }
        .into_view()
    })
}

pub(super) fn info(props: &PropBag) -> Option<View> {
    props
        .view("info")
        .map(|info| view! { <PageHeaderInfo>{info}</PageHeaderInfo> }.into_view())
}

// `contentRight` and `navRight` still render when their replacements are absent.
pub(super) fn actions(props: &PropBag) -> Option<View> {
    props
        .view_of_first(&["onRenderActions", "contentRight"])
        .map(|actions| {
            view! {
                <div class="ui-page-header__col-actions" data-ui-slot="actions">{actions}</div>
            }
            .into_view()
        })
}

pub(super) fn controls(props: &PropBag) -> Option<View> {
    props
        .view_of_first(&["onRenderControls", "navRight"])
        .map(|controls| {
            view! {
                <div class="ui-page-header__col-controls" data-ui-slot="controls">{controls}</div>
            }
            .into_view()
        })
}

pub(super) fn details(props: &PropBag) -> Option<View> {
    let details = props.records("details");
    if details.is_empty() {
        return None;
    }
    Some(view! { <PageHeaderDetailRow details=details.to_vec() /> }.into_view())
}
