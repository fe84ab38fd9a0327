use serde::{Deserialize, Serialize};

use super::defaults;

/// Identity resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Exclusive edit-distance bound for fuzzy merging. `0` or `1` disables
    /// fuzzy merging entirely; exact matches always merge.
    pub fuzzy_threshold: usize,
    /// Fold case before exact and fuzzy comparison.
    pub case_insensitive: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: defaults::DEFAULT_FUZZY_THRESHOLD,
            case_insensitive: defaults::DEFAULT_CASE_INSENSITIVE,
        }
    }
}
