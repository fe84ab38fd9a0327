use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which rendering a caller asked for. The label is also the key of the
/// output-type frequency table in running statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Pseudonymized,
    Tagged,
    Conll,
}

impl OutputType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pseudonymized => "pseudonymized",
            Self::Tagged => "tagged",
            Self::Conll => "conll",
        }
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pseudonymized" | "pseudo" => Ok(Self::Pseudonymized),
            "tagged" | "tags" => Ok(Self::Tagged),
            "conll" => Ok(Self::Conll),
            other => Err(format!("unknown output type: {other}")),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
