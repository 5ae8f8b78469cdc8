//! Story catalogs for the component library.
//!
//! Each component ships a catalog of named, stateless renders. The
//! visual-regression host snapshots every story; [`StoryBook`] renders one
//! catalog for manual review and [`story_index_json`] describes all of them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use leptos::*;
use serde::Serialize;
use thiserror::Error;

mod files;
mod page_header;
mod welcome_mat;

pub use files::files_catalog;
pub use page_header::page_header_catalog;
pub use welcome_mat::welcome_mat_catalog;

/// One named render of a component.
#[derive(Debug, Clone, Copy)]
pub struct Story {
    /// Display name, unique within its catalog.
    pub name: &'static str,
    /// Stateless render function.
    pub render: fn() -> View,
}

impl Story {
    /// URL-safe form of the name.
    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

/// Ordered stories for one component plus the wrapper applied to each.
#[derive(Debug, Clone)]
pub struct StoryCatalog {
    /// Component display name.
    pub component: &'static str,
    /// Class of the element wrapping every story, if any.
    pub decorator: Option<&'static str>,
    /// Stories in presentation order.
    pub stories: Vec<Story>,
}

/// Structural problems in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog has nothing to render.
    #[error("catalog `{component}` has no stories")]
    Empty {
        /// Component display name.
        component: &'static str,
    },
    /// Two stories share a display name.
    #[error("catalog `{component}` lists story `{name}` more than once")]
    DuplicateName {
        /// Component display name.
        component: &'static str,
        /// Repeated story name.
        name: &'static str,
    },
    /// Two differently named stories collapse to one slug.
    #[error("stories `{first}` and `{second}` in `{component}` share the slug `{slug}`")]
    DuplicateSlug {
        /// Component display name.
        component: &'static str,
        /// Earlier story.
        first: &'static str,
        /// Later story.
        second: &'static str,
        /// Shared slug.
        slug: String,
    },
}

/// Serialized description of one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndex {
    /// Component display name.
    pub component: String,
    /// Decorator class, if any.
    pub decorator: Option<String>,
    /// Stories in presentation order.
    pub stories: Vec<StoryIndexEntry>,
}

/// Serialized description of one story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryIndexEntry {
    /// Host-wide identifier, `{component}--{story}`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
}

impl StoryCatalog {
    /// Starts an empty, undecorated catalog.
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            decorator: None,
            stories: Vec::new(),
        }
    }

    /// Wraps every story in an element with `class`.
    pub fn decorated(mut self, class: &'static str) -> Self {
        self.decorator = Some(class);
        self
    }

    /// Appends a story.
    pub fn story(mut self, name: &'static str, render: fn() -> View) -> Self {
        self.stories.push(Story { name, render });
        self
    }

    /// Looks a story up by display name or slug.
    pub fn find(&self, name_or_slug: &str) -> Option<&Story> {
        self.stories
            .iter()
            .find(|story| story.name == name_or_slug || story.slug() == name_or_slug)
    }

    /// Checks that the catalog is non-empty and its names and slugs are unique.
    pub fn check(&self) -> Result<(), CatalogError> {
        if self.stories.is_empty() {
            return Err(CatalogError::Empty {
                component: self.component,
            });
        }

        let mut seen: HashMap<String, &'static str> = HashMap::new();
        for story in &self.stories {
            let slug = story.slug();
            match seen.get(&slug).copied() {
                Some(first) if first == story.name => {
                    return Err(CatalogError::DuplicateName {
                        component: self.component,
                        name: story.name,
                    });
                }
                Some(first) => {
                    return Err(CatalogError::DuplicateSlug {
                        component: self.component,
                        first,
                        second: story.name,
                        slug,
                    });
                }
                None => {
                    seen.insert(slug, story.name);
                }
            }
        }
        Ok(())
    }

    /// Index entry for the host.
    pub fn index(&self) -> CatalogIndex {
        let component_slug = slugify(self.component);
        CatalogIndex {
            component: self.component.to_string(),
            decorator: self.decorator.map(str::to_string),
            stories: self
                .stories
                .iter()
                .map(|story| StoryIndexEntry {
                    id: format!("{component_slug}--{}", story.slug()),
                    name: story.name.to_string(),
                    slug: story.slug(),
                })
                .collect(),
        }
    }
}

/// Every catalog in presentation order.
pub fn catalogs() -> Vec<StoryCatalog> {
    vec![page_header_catalog(), welcome_mat_catalog(), files_catalog()]
}

/// Pretty-printed JSON index of every catalog.
pub fn story_index_json() -> Result<String, serde_json::Error> {
    let index = catalogs()
        .iter()
        .map(StoryCatalog::index)
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&index)
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[component]
/// Renders one catalog with a story picker.
pub fn StoryBook(
    /// Catalog to render.
    catalog: StoryCatalog,
    /// Renders every story at once instead of the selected one.
    #[prop(optional)]
    show_all: bool,
) -> impl IntoView {
    if let Err(err) = catalog.check() {
        logging::warn!("story catalog rejected: {err}");
    }

    let component = catalog.component;
    let decorator = catalog.decorator;
    let catalog = store_value(catalog);
    let selected = create_rw_signal(0usize);

    let decorate = move |story: Story| {
        view! {
            <div class=decorator data-ui-story=story.slug()>
                {(story.render)()}
            </div>
        }
    };

    let picker = catalog.with_value(|catalog| {
        catalog
            .stories
            .iter()
            .enumerate()
            .map(|(index, story)| {
                let name = story.name;
                view! {
                    <button
                        type="button"
                        class="ui-story-book__tab"
                        aria-pressed=move || (selected.get() == index).to_string()
                        on:click=move |_| selected.set(index)
                    >
                        {name}
                    </button>
                }
            })
            .collect_view()
    });

    let stage = move || {
        if show_all {
            catalog
                .with_value(|catalog| catalog.stories.clone())
                .into_iter()
                .map(decorate)
                .collect_view()
        } else {
            catalog
                .with_value(|catalog| catalog.stories.get(selected.get()).copied())
                .map(decorate)
                .into_view()
        }
    };

    view! {
        <section class="ui-story-book" data-ui-kind="story-book" data-ui-component=component>
            <nav class="ui-story-book__picker" aria-label=format!("{component} stories")>
                {picker}
            </nav>
            <div class="ui-story-book__stage">{stage}</div>
        </section>
    }
}

#[component]
/// Every catalog, each fully expanded.
pub fn StoryShowcase() -> impl IntoView {
    view! {
        <main class="ui-story-showcase">
            {catalogs()
                .into_iter()
                .map(|catalog| view! { <StoryBook catalog=catalog show_all=true /> })
                .collect_view()}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blank() -> View {
        ().into_view()
    }

    #[test]
    fn slugs_collapse_punctuation() {
        assert_eq!(slugify("w/o Image"), "w-o-image");
        assert_eq!(slugify("  Record Home "), "record-home");
        assert_eq!(slugify("PageHeader"), "pageheader");
    }

    #[test]
    fn shipped_catalogs_are_well_formed() {
        for catalog in catalogs() {
            assert_eq!(catalog.check(), Ok(()), "{}", catalog.component);
        }
    }

    #[test]
    fn duplicate_names_and_slugs_are_rejected() {
        let repeated = StoryCatalog::new("Files")
            .story("Default", blank)
            .story("Default", blank);
        assert_eq!(
            repeated.check(),
            Err(CatalogError::DuplicateName {
                component: "Files",
                name: "Default",
            })
        );

        let colliding = StoryCatalog::new("Files")
            .story("w/o Image", blank)
            .story("W-O image", blank);
        assert_eq!(
            colliding.check(),
            Err(CatalogError::DuplicateSlug {
                component: "Files",
                first: "w/o Image",
                second: "W-O image",
                slug: "w-o-image".to_string(),
            })
        );

        assert_eq!(
            StoryCatalog::new("Files").check(),
            Err(CatalogError::Empty { component: "Files" })
        );
    }

    #[test]
    fn files_catalog_matches_published_story_names() {
        let catalog = files_catalog();
        assert_eq!(catalog.decorator, Some("ui-p-around_medium"));
        assert_eq!(
            catalog.stories.iter().map(|story| story.name).collect::<Vec<_>>(),
            vec!["Default", "w/o Image", "w/o Title", "w/ Actions", "Loading"]
        );
        assert_eq!(catalog.find("w-o-title").map(|story| story.name), Some("w/o Title"));
    }

    #[test]
    fn index_uses_component_prefixed_ids() {
        let index = files_catalog().index();
        assert_eq!(index.stories[1].id, "files--w-o-image");

        let json = story_index_json().expect("index serializes");
        assert!(json.contains("\"component\": \"WelcomeMat\""));
        assert!(json.contains("\"id\": \"pageheader--related-list\""));
    }
}
