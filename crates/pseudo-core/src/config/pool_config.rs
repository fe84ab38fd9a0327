use serde::{Deserialize, Serialize};

use super::defaults;

/// Replacement pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Shuffle the pool once per document. When false the pool is consumed
    /// in alphabetical order (`A...`, `B...`, ...).
    pub shuffle: bool,
    /// Fixed shuffle seed. When absent the seed is derived from a hash of
    /// the document text, so a given document always gets the same pool.
    pub seed: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            shuffle: defaults::DEFAULT_POOL_SHUFFLE,
            seed: None,
        }
    }
}
