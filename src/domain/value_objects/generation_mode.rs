//! Generation mode - who authors the strategy, script acts, and metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Every stage runs from the built-in templates
    #[default]
    Template,
    /// Strategy, script acts, and metadata come from the remote text-generation service
    Assisted,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => f.write_str("template"),
            Self::Assisted => f.write_str("assisted"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "assisted" | "llm" => Ok(Self::Assisted),
            other => Err(format!(
                "Unknown generation mode '{}', expected 'template' or 'assisted'",
                other
            )),
        }
    }
}
