//! Component display names used in diagnostics and documentation lookups.

/// Page header.
pub const PAGE_HEADER: &str = "PageHeader";
/// Welcome mat.
pub const WELCOME_MAT: &str = "WelcomeMat";
/// One welcome mat step.
pub const WELCOME_MAT_TILE: &str = "WelcomeMatTile";
/// File card grid.
pub const FILES: &str = "Files";
/// One file card.
pub const FILE: &str = "File";
