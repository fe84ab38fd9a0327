use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Entity category reported by the recognizer.
///
/// Only `Person`, `Organization` and `Location` are pseudonymized; anything
/// else the recognizer emits collapses into `Other` and is dropped by the
/// span normalizer.
///
/// Serializes as `PERSON`/`ORGANIZATION`/`LOCATION`/`OTHER`; deserializes any
/// recognizer label through [`EntityCategory::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Other,
}

impl EntityCategory {
    /// All pseudonymized categories.
    pub const PSEUDONYMIZED: [EntityCategory; 3] = [
        EntityCategory::Person,
        EntityCategory::Organization,
        EntityCategory::Location,
    ];

    /// Parse a recognizer label. Accepts long (`PERSON`) and short (`PER`)
    /// forms, optionally BIO-prefixed (`B-PER`, `I-LOC`), in any case.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        let bare = label
            .split_once('-')
            .filter(|(prefix, _)| matches!(*prefix, "B" | "I" | "E" | "S" | "b" | "i" | "e" | "s"))
            .map_or(label, |(_, rest)| rest);
        match bare.to_ascii_uppercase().as_str() {
            "PER" | "PERSON" => Self::Person,
            "ORG" | "ORGANIZATION" | "ORGANISATION" => Self::Organization,
            "LOC" | "LOCATION" => Self::Location,
            _ => Self::Other,
        }
    }

    /// Whether spans of this category are substituted and tagged.
    pub fn is_pseudonymized(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Markup tag name (`PER`, `ORG`, `LOC`). `None` for `Other`.
    pub fn tag_name(self) -> Option<&'static str> {
        match self {
            Self::Person => Some("PER"),
            Self::Organization => Some("ORG"),
            Self::Location => Some("LOC"),
            Self::Other => None,
        }
    }

    /// Short label used as the statistics key.
    pub fn label(self) -> &'static str {
        self.tag_name().unwrap_or("OTHER")
    }
}

impl FromStr for EntityCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for EntityCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
