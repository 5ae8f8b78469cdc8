//! Contract behavior switches, provided per component subtree.

use leptos::{provide_context, use_context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Controls which development aids components run.
pub struct ContractConfig {
    /// Validate caller props against the documentation schema on mount.
    pub validate_props: bool,
    /// Report discriminators that fell back to the default variant.
    pub report_unknown_variants: bool,
}

impl ContractConfig {
    /// All development aids enabled.
    pub const fn development() -> Self {
        Self {
            validate_props: true,
            report_unknown_variants: true,
        }
    }

    /// All development aids disabled.
    pub const fn production() -> Self {
        Self {
            validate_props: false,
            report_unknown_variants: false,
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }
}

/// Overrides the contract config for components below the current owner.
pub fn provide_contract_config(config: ContractConfig) {
    provide_context(config);
}

/// Returns the nearest provided config, or the build-profile default.
///
/// Release builds never validate, whatever an ancestor provided.
pub fn use_contract_config() -> ContractConfig {
    if !cfg!(debug_assertions) {
        return ContractConfig::production();
    }
    use_context::<ContractConfig>().unwrap_or_default()
}
