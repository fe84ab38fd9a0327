use serde::{Deserialize, Serialize};

use super::defaults;

/// Text renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Escape `&`, `<` and `>` from source text in the tagged rendering.
    pub escape_markup: bool,
    /// Joins rendered sentences in both document outputs.
    pub sentence_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_markup: defaults::DEFAULT_ESCAPE_MARKUP,
            sentence_separator: defaults::DEFAULT_SENTENCE_SEPARATOR.to_string(),
        }
    }
}
