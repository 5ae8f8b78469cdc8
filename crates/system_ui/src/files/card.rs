use component_contract::{PropBag, RenderingStrategy};
use leptos::*;

use super::file_title;
use crate::icon::{Icon, IconCategory};

/// Preview, title, and optional action menu.
pub(super) struct Card;

pub(super) static CARD: Card = Card;

impl RenderingStrategy for Card {
    fn render(&self, props: &PropBag) -> View {
        let title = file_title(props).map(str::to_string);
        let title_class = if props.flag("hasNoVisibleTitle") {
            "ui-file__title ui-assistive-text"
        } else {
            "ui-file__title"
        };

        view! {
            <figure class="ui-file__figure">
                {preview(props, title.clone())}
                <figcaption class=title_class data-ui-slot="title">
                    <span class="ui-media ui-media_small">
                        <span class="ui-media__figure">{placeholder_icon(props, "x-small")}</span>
                        <span class="ui-media__body ui-truncate" title=title.clone()>{title}</span>
                    </span>
                </figcaption>
            </figure>
            {props.view("moreActions").map(|actions| view! {
                <div class="ui-file__actions-menu" data-ui-slot="actions">{actions}</div>
            })}
        }
        .into_view()
    }
}

fn placeholder_icon(props: &PropBag, size: &str) -> View {
    props.view("icon").unwrap_or_else(|| {
        let name = props.text("iconName").unwrap_or("attachment").to_string();
        view! {
            <Icon category=IconCategory::Doctype name=name size=Some(size.to_string()) />
        }
        .into_view()
    })
}

fn preview(props: &PropBag, title: Option<String>) -> View {
    if props.flag("isLoading") {
        return view! {
            <div class="ui-file__crop ui-file_loading" data-ui-slot="preview" aria-busy="true">
                <div class="ui-spinner" role="status">
                    <span class="ui-assistive-text">"Loading"</span>
                </div>
            </div>
        }
        .into_view();
    }

    let on_click = props.handler("onClickImage");
    let handle_click = move |ev: ev::MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };
    let href = props.text("href").unwrap_or("#").to_string();

    let content = match props.text("image") {
        Some(image) => view! { <img src=image.to_string() alt=title /> }.into_view(),
        None => view! {
            <span class="ui-file__icon" data-ui-slot="placeholder">
                {placeholder_icon(props, "large")}
            </span>
        }
        .into_view(),
    };

    view! {
        <a href=href class="ui-file__crop" data-ui-slot="preview" on:click=handle_click>
            {content}
        </a>
    }
    .into_view()
}
