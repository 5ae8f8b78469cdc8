//! Component contract layer shared by every design-system component.
//!
//! The crate owns two mechanisms that components compose at mount time:
//!
//! - a schema-driven prop validator that compares the caller's [`PropBag`]
//!   against the component's documented [`PropSchema`] and reports
//!   [`Diagnostic`]s through an injectable [`DiagnosticSink`] without ever
//!   blocking the render;
//! - a [`VariantRegistry`] that maps a `variant` discriminator (canonical or
//!   legacy alias) onto one [`RenderingStrategy`] and wraps its output in a
//!   container carrying the derived state classes.
//!
//! Both are read-only after initialization. The only per-instance mutable
//! state is the [`MountCheck`] flag that keeps validation to one pass per mount.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod config;
mod diagnostics;
mod mount;
mod props;
mod schema;
mod validate;
mod variant;

pub use class_names::ClassNames;
pub use config::{provide_contract_config, use_contract_config, ContractConfig};
pub use diagnostics::{
    provide_diagnostic_sink, use_diagnostic_sink, CollectingSink, ConsoleSink, Diagnostic,
    DiagnosticKind, DiagnosticSink, Severity, SinkHandle,
};
pub use mount::{report_unknown_variant, validate_on_mount};
pub use props::{PropBag, PropCategory, PropValue};
pub use schema::{PropDescriptor, PropSchema, SchemaError};
pub use validate::{check_props, validate, MountCheck};
pub use variant::{
    Match, RegistryError, RenderingStrategy, Resolved, VariantRegistry, VariantRegistryBuilder,
    VariantSpec,
};

/// Prop key every component reads its discriminator from.
pub const VARIANT_PROP: &str = "variant";

/// Prop key every component reads caller-supplied extra classes from.
pub const CLASS_NAME_PROP: &str = "className";
