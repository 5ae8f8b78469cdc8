use component_contract::{PropBag, VARIANT_PROP};
use leptos::*;
use system_ui::{constants::PAGE_HEADER, page_header_variants, PageHeader};

use crate::StoryCatalog;

// Story name and the discriminator it passes. Legacy spellings get their own
// stories so snapshots prove they still match the hyphenated layouts.
const VARIANT_STORIES: [(&str, &str); 7] = [
    ("Base", "base"),
    ("Object Home", "object-home"),
    ("Record Home", "record-home"),
    ("Related List", "related-list"),
    ("Legacy objectHome", "objectHome"),
    ("Legacy recordHome", "recordHome"),
    ("Legacy relatedList", "relatedList"),
];

fn discriminator_for(story: &str) -> &'static str {
    VARIANT_STORIES
        .iter()
        .find(|(name, _)| *name == story)
        .map(|(_, variant)| *variant)
        .unwrap_or("base")
}

fn button(label: &'static str) -> ViewFn {
    ViewFn::from(move || view! { <button type="button" class="ui-button ui-button_neutral">{label}</button> })
}

fn header_props(variant: &'static str) -> PropBag {
    let props = PropBag::new().with(VARIANT_PROP, variant);
    match page_header_variants().canonical_name(variant) {
        "object-home" => props
            .with("iconCategory", "standard")
            .with("iconName", "lead")
            .with("label", "Leads")
            .with("title", "My Leads (truncates)")
            .with("info", "10 items • sorted by name")
            .with("onRenderActions", button("New Lead"))
            .with("onRenderControls", button("Filter")),
        "record-home" => props
            .with("iconCategory", "standard")
            .with("iconName", "opportunity")
            .with("label", "Opportunity")
            .with("title", "Acme - 1,200 Widgets")
            .with("onRenderActions", button("Edit"))
            .with(
                "details",
                vec![
                    PropBag::new().with("label", "Field 1").with("content", "Hyperlink"),
                    PropBag::new()
                        .with("label", "Field 2")
                        .with(
                            "content",
                            "Multiple Lines of text to the point that it truncates",
                        )
                        .with("truncate", true),
                    PropBag::new().with("label", "Field 3").with("content", "Hyperlink"),
                ],
            ),
        "related-list" => props
            .with(
                "trail",
                vec![
                    PropBag::new().with("label", "Accounts").with("href", "#accounts"),
                    PropBag::new().with("label", "Company One").with("href", "#company-one"),
                ],
            )
            .with("title", "Contacts")
            .with("info", "10 items • sorted by name")
            .with("onRenderActions", button("Add Contact"))
            .with("onRenderControls", button("Refresh")),
        _ => props
            .with("iconCategory", "standard")
            .with("iconName", "opportunity")
            .with("title", "Rohde Corp - 80,000 Widgets")
            .with("info", "Mark Jaeckal • Unlimited Customer • 11/13/15"),
    }
}

fn render(story: &str) -> View {
    view! { <PageHeader props=header_props(discriminator_for(story)) /> }.into_view()
}

/// Page header stories: one per layout plus one per legacy spelling.
pub fn page_header_catalog() -> StoryCatalog {
    StoryCatalog::new(PAGE_HEADER)
        .story("Base", || render("Base"))
        .story("Object Home", || render("Object Home"))
        .story("Record Home", || render("Record Home"))
        .story("Related List", || render("Related List"))
        .story("Legacy objectHome", || render("Legacy objectHome"))
        .story("Legacy recordHome", || render("Legacy recordHome"))
        .story("Legacy relatedList", || render("Legacy relatedList"))
}
