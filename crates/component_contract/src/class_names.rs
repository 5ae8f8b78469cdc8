//! Ordered CSS class lists for component containers.

use std::fmt;

/// Ordered, de-duplicated list of CSS classes.
///
/// Mirrors the usual `block`, conditional modifiers, then caller extras
/// composition. Empty entries are skipped and repeats keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    /// Starts a list with a base class.
    pub fn new(base: &str) -> Self {
        let mut classes = Self::default();
        classes.push(base);
        classes
    }

    /// Appends one class.
    pub fn push(&mut self, class: &str) {
        let class = class.trim();
        if !class.is_empty() && !self.0.iter().any(|existing| existing == class) {
            self.0.push(class.to_string());
        }
    }

    /// Appends one class.
    pub fn with(mut self, class: &str) -> Self {
        self.push(class);
        self
    }

    /// Appends `class` when `condition` holds.
    pub fn with_if(self, condition: bool, class: &str) -> Self {
        if condition {
            self.with(class)
        } else {
            self
        }
    }

    /// Appends every whitespace-separated class in `extra`, when present.
    pub fn with_extra(mut self, extra: Option<&str>) -> Self {
        for class in extra.unwrap_or_default().split_whitespace() {
            self.push(class);
        }
        self
    }

    /// Returns whether `class` is in the list.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }

    /// Classes in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> Extend<&'a str> for ClassNames {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for class in iter {
            self.push(class);
        }
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl From<ClassNames> for String {
    fn from(value: ClassNames) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_base_modifiers_and_extras() {
        let classes = ClassNames::new("ui-page-header")
            .with_if(true, "ui-page-header_record-home")
            .with_if(false, "ui-page-header_related-list")
            .with_extra(Some("  app-header  ui-page-header "));

        assert_eq!(
            classes.to_string(),
            "ui-page-header ui-page-header_record-home app-header"
        );
    }

    #[test]
    fn skips_blank_entries() {
        let mut classes = ClassNames::new("");
        classes.extend(["", " ", "ui-file"]);
        assert_eq!(classes.as_slice(), ["ui-file".to_string()]);
        assert_eq!(ClassNames::default().with_extra(None).to_string(), "");
    }
}
