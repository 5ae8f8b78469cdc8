//! Icon slot markup.
//!
//! Sprite lookup and SVG rendering belong to the icon host; components only
//! emit the placeholder element carrying the sprite coordinates.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sprite categories.
pub enum IconCategory {
    /// Action sprites.
    Action,
    /// Custom sprites.
    Custom,
    /// Document-type sprites.
    Doctype,
    /// Standard object sprites.
    #[default]
    Standard,
    /// Utility sprites.
    Utility,
}

impl IconCategory {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Custom => "custom",
            Self::Doctype => "doctype",
            Self::Standard => "standard",
            Self::Utility => "utility",
        }
    }

    /// Parses a category token; unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "action" => Some(Self::Action),
            "custom" => Some(Self::Custom),
            "doctype" => Some(Self::Doctype),
            "standard" => Some(Self::Standard),
            "utility" => Some(Self::Utility),
            _ => None,
        }
    }
}

#[component]
/// Icon placeholder resolved by the icon host.
pub fn Icon(
    /// Sprite sheet the icon comes from.
    #[prop(default = IconCategory::Standard)]
    category: IconCategory,
    /// Sprite name within the category.
    #[prop(into)]
    name: String,
    /// Size token such as `x-small` or `large`.
    #[prop(default = None)]
    size: Option<String>,
    /// Color variant token.
    #[prop(default = None)]
    variant: Option<String>,
    /// Placement relative to adjacent text.
    #[prop(default = None)]
    position: Option<String>,
    /// `data-ui-slot` value for the host element.
    #[prop(optional)]
    ui_slot: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class=format!("ui-icon ui-icon-{}-{}", category.token(), name)
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-slot=ui_slot
            data-ui-icon-category=category.token()
            data-ui-icon-name=name.clone()
            data-ui-size=size
            data-ui-variant=variant
            data-ui-position=position
            aria-hidden="true"
        ></span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_categories_only() {
        assert_eq!(IconCategory::from_token("doctype"), Some(IconCategory::Doctype));
        assert_eq!(IconCategory::from_token("utility"), Some(IconCategory::Utility));
        assert_eq!(IconCategory::from_token("Utility"), None);
        assert_eq!(IconCategory::from_token("emoji"), None);
        assert_eq!(IconCategory::default(), IconCategory::Standard);
    }
}
