//! Enterprise UI components built on the shared component contract.
//!
//! Every component takes a single [`PropBag`](component_contract::PropBag),
//! validates it against the prop documentation embedded at build time, and
//! dispatches to a layout through a [`VariantRegistry`](component_contract::VariantRegistry).
//! Rendered containers carry the stable `data-ui-*` attributes and `ui-*`
//! class names consumed by the stylesheet layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod constants;
mod docs;
mod files;
mod icon;
mod page_header;
mod welcome_mat;

pub use docs::{prop_documentation_json, prop_schema};
pub use files::{file_crops, file_title, File, Files, CROP_PROP, DEFAULT_CROP};
pub use icon::{Icon, IconCategory};
pub use page_header::{
    page_header_variants, PageHeader, PageHeaderDetailBlock, PageHeaderDetailRow, PageHeaderInfo,
    PageHeaderTitle,
};
pub use welcome_mat::{completion, welcome_mat_variants, WelcomeMat, WelcomeMatTile};

/// Convenience imports for crates rendering these components.
pub mod prelude {
    pub use crate::{
        File, Files, Icon, IconCategory, PageHeader, PageHeaderDetailBlock, PageHeaderDetailRow,
        PageHeaderInfo, PageHeaderTitle, WelcomeMat, WelcomeMatTile,
    };
    pub use component_contract::{PropBag, PropValue, VARIANT_PROP};
}
