//! Typed prop bags passed from callers into components.

use std::fmt;

use leptos::ev::MouseEvent;
use leptos::{Callable, Callback, IntoView, View, ViewFn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic category of a [`PropValue`].
pub enum PropCategory {
    /// Plain text.
    Text,
    /// Boolean flag.
    Flag,
    /// Deferred markup.
    Markup,
    /// Render function producing markup on demand.
    Render,
    /// Click/event handler.
    Handler,
    /// Array of structured records.
    Records,
}

impl PropCategory {
    /// Returns the stable token used in schema documents.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Flag => "flag",
            Self::Markup => "markup",
            Self::Render => "render",
            Self::Handler => "handler",
            Self::Records => "records",
        }
    }
}

/// One caller-supplied prop value.
#[derive(Clone)]
pub enum PropValue {
    /// Plain text.
    Text(String),
    /// Boolean flag.
    Flag(bool),
    /// Deferred markup, typically an element the caller built.
    Markup(ViewFn),
    /// Render function invoked by the component when it needs the content.
    Render(Callback<(), View>),
    /// Event handler.
    Handler(Callback<MouseEvent>),
    /// Array of nested records, each itself a prop bag.
    Records(Vec<PropBag>),
}

impl PropValue {
    /// Returns the semantic category of this value.
    pub fn category(&self) -> PropCategory {
        match self {
            Self::Text(_) => PropCategory::Text,
            Self::Flag(_) => PropCategory::Flag,
            Self::Markup(_) => PropCategory::Markup,
            Self::Render(_) => PropCategory::Render,
            Self::Handler(_) => PropCategory::Handler,
            Self::Records(_) => PropCategory::Records,
        }
    }

    /// Materializes text, markup, and render values into a view.
    ///
    /// Flags, handlers, and records have no direct visual form and yield `None`.
    pub fn to_view(&self) -> Option<View> {
        match self {
            Self::Text(text) => Some(text.clone().into_view()),
            Self::Markup(markup) => Some(markup.run()),
            Self::Render(render) => Some(render.call(())),
            Self::Flag(_) | Self::Handler(_) | Self::Records(_) => None,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Self::Records(records) => f.debug_tuple("Records").field(records).finish(),
            other => write!(f, "{}(..)", other.category().token()),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<ViewFn> for PropValue {
    fn from(value: ViewFn) -> Self {
        Self::Markup(value)
    }
}

impl From<Callback<(), View>> for PropValue {
    fn from(value: Callback<(), View>) -> Self {
        Self::Render(value)
    }
}

impl From<Callback<MouseEvent>> for PropValue {
    fn from(value: Callback<MouseEvent>) -> Self {
        Self::Handler(value)
    }
}

impl From<Vec<PropBag>> for PropValue {
    fn from(value: Vec<PropBag>) -> Self {
        Self::Records(value)
    }
}

/// Ordered mapping from prop name to value for one rendered instance.
///
/// Insertion order is preserved so diagnostics follow the order the caller
/// wrote the props in. Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct PropBag {
    entries: Vec<(String, PropValue)>,
}

impl PropBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a prop, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns whether `key` was supplied.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates prop names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of supplied props.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no props were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the text value for `key`, ignoring other categories.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(PropValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the flag value for `key`; absent or non-flag values read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(PropValue::Flag(true)))
    }

    /// Returns the records for `key`, or an empty slice.
    pub fn records(&self, key: &str) -> &[PropBag] {
        match self.get(key) {
            Some(PropValue::Records(records)) => records.as_slice(),
            _ => &[],
        }
    }

    /// Returns the event handler for `key`.
    pub fn handler(&self, key: &str) -> Option<Callback<MouseEvent>> {
        match self.get(key) {
            Some(PropValue::Handler(handler)) => Some(handler.clone()),
            _ => None,
        }
    }

    /// Materializes `key` into a view when it holds text, markup, or a render function.
    pub fn view(&self, key: &str) -> Option<View> {
        self.get(key).and_then(PropValue::to_view)
    }

    /// Materializes the first of `keys` that yields a view.
    ///
    /// Components use this to honor a deprecated prop when its replacement is absent.
    pub fn view_of_first(&self, keys: &[&str]) -> Option<View> {
        keys.iter().find_map(|key| self.view(key))
    }
}

impl<K, V> FromIterator<(K, V)> for PropBag
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_replaces_in_place_and_keeps_order() {
        let mut bag = PropBag::new().with("title", "One").with("info", "meta");
        let previous = bag.insert("title", "Two");

        assert!(matches!(previous, Some(PropValue::Text(ref text)) if text == "One"));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["title", "info"]);
        assert_eq!(bag.text("title"), Some("Two"));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn typed_accessors_ignore_other_categories() {
        let bag = PropBag::new()
            .with("isComplete", true)
            .with("title", "Welcome")
            .with("details", vec![PropBag::new().with("label", "Owner")]);

        assert!(bag.flag("isComplete"));
        assert!(!bag.flag("title"));
        assert!(!bag.flag("missing"));
        assert_eq!(bag.text("isComplete"), None);
        assert_eq!(bag.records("details").len(), 1);
        assert!(bag.records("title").is_empty());
        assert!(bag.handler("title").is_none());
    }

    #[test]
    fn categories_report_stable_tokens() {
        let bag: PropBag = [("a", PropValue::from("x")), ("b", PropValue::from(false))]
            .into_iter()
            .collect();
        let tokens = bag
            .iter()
            .map(|(_, value)| value.category().token())
            .collect::<Vec<_>>();
        assert_eq!(tokens, vec!["text", "flag"]);
    }

    #[test]
    fn debug_output_names_opaque_categories() {
        let value = PropValue::Markup(ViewFn::from(|| ()));
        assert_eq!(format!("{value:?}"), "markup(..)");
    }
}
