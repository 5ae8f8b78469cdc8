//! Variant registries and discriminator dispatch.
//!
//! A registry maps canonical discriminator values onto rendering strategies
//! and legacy spellings onto canonical values. Both tables are plain data
//! fixed at first use; adding a variant or alias never touches dispatch code.

use std::fmt;

use leptos::*;
use thiserror::Error;

use crate::{ClassNames, PropBag, CLASS_NAME_PROP};

/// One way of rendering a component.
///
/// Strategies receive the caller's full, unfiltered prop bag and interpret it
/// according to their own contract.
pub trait RenderingStrategy: Sync {
    /// Renders the component body.
    fn render(&self, props: &PropBag) -> View;
}

/// Registration entry for one canonical variant.
#[derive(Clone, Copy)]
pub struct VariantSpec {
    name: &'static str,
    strategy: &'static dyn RenderingStrategy,
    state_class: bool,
}

impl VariantSpec {
    /// Variant `name` rendered by `strategy`, with no state class.
    pub fn new(name: &'static str, strategy: &'static dyn RenderingStrategy) -> Self {
        Self {
            name,
            strategy,
            state_class: false,
        }
    }

    /// Adds the `<block>_<name>` state class to the container for this variant.
    pub fn with_state_class(mut self) -> Self {
        self.state_class = true;
        self
    }
}

impl fmt::Debug for VariantSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantSpec")
            .field("name", &self.name)
            .field("state_class", &self.state_class)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Inconsistent registration tables.
pub enum RegistryError {
    /// The same canonical name was registered twice.
    #[error("variant `{0}` is registered more than once")]
    DuplicateVariant(&'static str),
    /// The same alias was registered twice.
    #[error("alias `{0}` is registered more than once")]
    DuplicateAlias(&'static str),
    /// An alias reuses a canonical name.
    #[error("alias `{0}` shadows a canonical variant")]
    AliasShadowsVariant(&'static str),
    /// An alias targets a name that is not a canonical variant.
    #[error("alias `{alias}` targets unregistered variant `{target}`")]
    DanglingAlias {
        /// Alias spelling.
        alias: &'static str,
        /// Missing canonical target.
        target: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a discriminator was matched.
pub enum Match {
    /// Exact canonical name.
    Canonical,
    /// Registered alias of a canonical name.
    Alias,
    /// Unregistered value; the default variant was used.
    Fallback,
}

/// Outcome of resolving one discriminator.
#[derive(Clone, Copy)]
pub struct Resolved {
    /// Canonical variant name.
    pub canonical: &'static str,
    /// Strategy registered for the canonical name.
    pub strategy: &'static dyn RenderingStrategy,
    /// How the discriminator matched.
    pub matched: Match,
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("canonical", &self.canonical)
            .field("matched", &self.matched)
            .finish_non_exhaustive()
    }
}

/// Builder for [`VariantRegistry`].
#[derive(Debug)]
pub struct VariantRegistryBuilder {
    kind: &'static str,
    default: VariantSpec,
    variants: Vec<VariantSpec>,
    aliases: Vec<(&'static str, &'static str)>,
}

impl VariantRegistryBuilder {
    /// Registers a canonical variant.
    pub fn variant(mut self, spec: VariantSpec) -> Self {
        self.variants.push(spec);
        self
    }

    /// Registers `alias` as another spelling of the canonical variant `canonical`.
    pub fn alias(mut self, alias: &'static str, canonical: &'static str) -> Self {
        self.aliases.push((alias, canonical));
        self
    }

    /// Validates the tables and freezes the registry.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when a canonical name or alias repeats,
    /// when an alias reuses a canonical name, or when an alias targets a name
    /// that is not registered.
    pub fn build(self) -> Result<VariantRegistry, RegistryError> {
        let mut variants = Vec::with_capacity(self.variants.len() + 1);
        variants.push(self.default);
        for spec in self.variants {
            if variants.iter().any(|existing: &VariantSpec| existing.name == spec.name) {
                return Err(RegistryError::DuplicateVariant(spec.name));
            }
            variants.push(spec);
        }

        let mut aliases: Vec<(&'static str, &'static str)> = Vec::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            if variants.iter().any(|spec| spec.name == alias) {
                return Err(RegistryError::AliasShadowsVariant(alias));
            }
            if aliases.iter().any(|(existing, _)| *existing == alias) {
                return Err(RegistryError::DuplicateAlias(alias));
            }
            if !variants.iter().any(|spec| spec.name == target) {
                return Err(RegistryError::DanglingAlias { alias, target });
            }
            aliases.push((alias, target));
        }

        Ok(VariantRegistry {
            kind: self.kind,
            block: format!("ui-{}", self.kind),
            variants,
            aliases,
        })
    }
}

/// Frozen discriminator → strategy table for one component.
#[derive(Debug)]
pub struct VariantRegistry {
    kind: &'static str,
    block: String,
    // The first entry is the default variant.
    variants: Vec<VariantSpec>,
    aliases: Vec<(&'static str, &'static str)>,
}

impl VariantRegistry {
    /// Starts a registry for component `kind` whose fallback is `default`.
    ///
    /// The container block class is `ui-<kind>`.
    pub fn builder(kind: &'static str, default: VariantSpec) -> VariantRegistryBuilder {
        VariantRegistryBuilder {
            kind,
            default,
            variants: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Component kind token.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Container block class.
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Canonical name of the default variant.
    pub fn default_variant(&self) -> &'static str {
        self.default_spec().name
    }

    /// Canonical names, default first.
    pub fn canonical_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|spec| spec.name)
    }

    /// Registered `(alias, canonical)` pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.aliases.iter().copied()
    }

    fn default_spec(&self) -> &VariantSpec {
        &self.variants[0]
    }

    fn find(&self, name: &str) -> Option<&VariantSpec> {
        self.variants.iter().find(|spec| spec.name == name)
    }

    fn lookup(&self, discriminator: &str) -> (&VariantSpec, Match) {
        if let Some(spec) = self.find(discriminator) {
            return (spec, Match::Canonical);
        }
        let aliased = self
            .aliases
            .iter()
            .find(|(alias, _)| *alias == discriminator)
            .and_then(|(_, target)| self.find(target));
        match aliased {
            Some(spec) => (spec, Match::Alias),
            None => (self.default_spec(), Match::Fallback),
        }
    }

    /// Resolves a discriminator: canonical name, then alias, then the default variant.
    pub fn resolve_detailed(&self, discriminator: &str) -> Resolved {
        let (spec, matched) = self.lookup(discriminator);
        Resolved {
            canonical: spec.name,
            strategy: spec.strategy,
            matched,
        }
    }

    /// Returns the strategy for a discriminator. Unknown values resolve to the default.
    pub fn resolve(&self, discriminator: &str) -> &'static dyn RenderingStrategy {
        self.lookup(discriminator).0.strategy
    }

    /// Canonical identity a discriminator normalizes to.
    pub fn canonical_name(&self, discriminator: &str) -> &'static str {
        self.lookup(discriminator).0.name
    }

    /// Structural state classes for a discriminator, after alias normalization.
    pub fn derive_state_classes(&self, discriminator: &str) -> Vec<String> {
        let (spec, _) = self.lookup(discriminator);
        if spec.state_class {
            vec![format!("{}_{}", self.block, spec.name)]
        } else {
            Vec::new()
        }
    }

    /// Full container class list: block, state classes, then the caller's `className`.
    pub fn container_classes(&self, discriminator: &str, props: &PropBag) -> ClassNames {
        let mut classes = ClassNames::new(&self.block);
        classes.extend(
            self.derive_state_classes(discriminator)
                .iter()
                .map(String::as_str),
        );
        classes.with_extra(props.text(CLASS_NAME_PROP))
    }

    /// Renders the resolved strategy inside the component container.
    ///
    /// The prop bag is handed to the strategy unmodified.
    pub fn render(&self, discriminator: &str, props: &PropBag) -> View {
        let resolved = self.resolve_detailed(discriminator);
        let class = self.container_classes(discriminator, props).to_string();
        view! {
            <div
                class=class
                data-ui-primitive="true"
                data-ui-kind=self.kind
                data-ui-variant=resolved.canonical
            >
                {resolved.strategy.render(props)}
            </div>
        }
        .into_view()
    }
}
