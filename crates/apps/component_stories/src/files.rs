use component_contract::PropBag;
use leptos::*;
use system_ui::{constants::FILES, Files};

use crate::StoryCatalog;

const PREVIEW: &str = "/assets/images/placeholder-img@16x9.jpg";

fn file(title: &str, icon: &str) -> PropBag {
    PropBag::new()
        .with("title", title)
        .with("iconName", icon)
        .with("href", "#")
}

fn with_image(file: PropBag) -> PropBag {
    file.with("image", PREVIEW)
}

fn actions_menu() -> ViewFn {
    ViewFn::from(|| {
        view! {
            <button type="button" class="ui-button ui-button_icon" aria-haspopup="true" title="More Options">
                <span class="ui-assistive-text">"More Options"</span>
            </button>
        }
    })
}

fn grid(children: Vec<PropBag>) -> View {
    view! { <Files props=PropBag::new().with("children", children) /> }.into_view()
}

fn default_files() -> Vec<PropBag> {
    vec![
        with_image(file("Proposal.pdf", "pdf")),
        with_image(file("Budget.xls", "excel")),
        with_image(file("Kickoff.ppt", "ppt")),
    ]
}

fn files_without_image() -> Vec<PropBag> {
    vec![
        file("Proposal.pdf", "pdf"),
        file("Budget.xls", "excel"),
        file("Notes.txt", "txt"),
    ]
}

fn files_without_title() -> Vec<PropBag> {
    default_files()
        .into_iter()
        .map(|file| file.with("hasNoVisibleTitle", true))
        .collect()
}

fn files_with_actions() -> Vec<PropBag> {
    default_files()
        .into_iter()
        .map(|file| file.with("moreActions", actions_menu()))
        .collect()
}

fn loading_files() -> Vec<PropBag> {
    vec![
        file("Proposal.pdf", "pdf").with("isLoading", true),
        with_image(file("Budget.xls", "excel")),
    ]
}

/// File card stories, each wrapped in a padded container.
pub fn files_catalog() -> StoryCatalog {
    StoryCatalog::new(FILES)
        .decorated("ui-p-around_medium")
        .story("Default", || grid(default_files()))
        .story("w/o Image", || grid(files_without_image()))
        .story("w/o Title", || grid(files_without_title()))
        .story("w/ Actions", || grid(files_with_actions()))
        .story("Loading", || grid(loading_files()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_contract::validate;
    use system_ui::{constants::FILE, prop_schema};

    #[test]
    fn story_files_use_documented_props_only() {
        let runtime = create_runtime();
        for files in [
            default_files(),
            files_without_image(),
            files_without_title(),
            files_with_actions(),
            loading_files(),
        ] {
            for file in &files {
                assert!(validate(FILE, file, prop_schema(FILE)).is_empty(), "{file:?}");
            }
        }
        runtime.dispose();
    }

    #[test]
    fn image_free_story_has_no_previews() {
        assert!(files_without_image().iter().all(|file| file.text("image").is_none()));
        assert!(loading_files().iter().any(|file| file.flag("isLoading")));
    }
}
