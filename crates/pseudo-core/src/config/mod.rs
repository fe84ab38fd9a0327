pub mod defaults;
mod observability_config;
mod pool_config;
mod render_config;
mod resolver_config;

pub use observability_config::ObservabilityConfig;
pub use pool_config::PoolConfig;
pub use render_config::RenderConfig;
pub use resolver_config::ResolverConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{PseudoError, PseudoResult};

/// Top-level engine configuration. Every section falls back to its defaults
/// when absent from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudoConfig {
    pub resolver: ResolverConfig,
    pub pool: PoolConfig,
    pub render: RenderConfig,
    pub observability: ObservabilityConfig,
}

impl PseudoConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> PseudoResult<Self> {
        toml::from_str(source).map_err(|e| PseudoError::ConfigError(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> PseudoResult<String> {
        toml::to_string(self).map_err(|e| PseudoError::ConfigError(e.to_string()))
    }
}
