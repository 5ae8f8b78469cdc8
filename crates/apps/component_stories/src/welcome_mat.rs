use component_contract::{PropBag, VARIANT_PROP};
use leptos::*;
use system_ui::{constants::WELCOME_MAT, WelcomeMat};

use crate::StoryCatalog;

const LOREM: &str = "Lorem ipsum dolor sit amet, lorem ipsum dolor sit amet.";

fn tile(title: &str, description: &str, icon: &str) -> PropBag {
    PropBag::new()
        .with("title", title)
        .with("description", description)
        .with("icon", icon)
        .with("href", "#")
}

fn steps_props() -> PropBag {
    PropBag::new()
        .with(
            "labels",
            vec![PropBag::new()
                .with("title", "The Lightning Experience is here!")
                .with(
                    "description",
                    "Welcome to Lightning Experience, the modern, beautiful user experience. \
                     With a sales- and service-centric mindset, we focused on reinventing the \
                     desktop environment to better support your business processes.",
                )],
        )
        .with(VARIANT_PROP, "steps")
        .with(
            "children",
            vec![
                tile("Welcome to Salesforce!", LOREM, "animal_and_nature").with("isComplete", true),
                tile("Learn About OpenCTI!", LOREM, "call").with("isComplete", true),
                tile(
                    "Power Up the Utility Bar",
                    "Tap into case history or share notes with fellow agents. It all happens on the utility bar.",
                    "call",
                ),
                tile(
                    "Customize your view",
                    "Tailor your cases to your team's workflow with custom list views.",
                    "upload",
                ),
                tile(
                    "Share the Knowledge",
                    "Harness your team's collective know-how with our powerful knowledge base.",
                    "knowledge_base",
                ),
            ],
        )
}

/// Welcome mat stories.
pub fn welcome_mat_catalog() -> StoryCatalog {
    StoryCatalog::new(WELCOME_MAT).story("Steps", || {
        view! {
            <div style="position: relative; height: 5rem;">
                <div style="width: 20rem;">
                    <WelcomeMat props=steps_props() />
                </div>
            </div>
        }
        .into_view()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use component_contract::validate;
    use pretty_assertions::assert_eq;
    use system_ui::{completion, constants::WELCOME_MAT_TILE, prop_schema};

    #[test]
    fn steps_story_is_two_of_five_complete() {
        assert_eq!(completion(&steps_props()), (2, 5));
    }

    #[test]
    fn steps_story_props_are_documented() {
        let props = steps_props();
        assert!(validate(WELCOME_MAT, &props, prop_schema(WELCOME_MAT)).is_empty());
        for tile in props.records("children") {
            assert!(validate(WELCOME_MAT_TILE, tile, prop_schema(WELCOME_MAT_TILE)).is_empty());
        }
    }
}
