//! Persona definitions and the directive text rendered from them.

use crate::llm::error::{GatewayError, GatewayResult};
use serde::Deserialize;

const CRUMBLE_TOML: &str = include_str!("./crumble.toml");

#[derive(Deserialize, Debug, Clone)]
struct PersonaFile {
    metadata: Metadata,
    personality: Personality,
}

#[derive(Deserialize, Debug, Clone)]
struct Metadata {
    schema_version: String,
}

#[derive(Deserialize, Debug, Clone)]
struct Personality {
    name: String,
    introduction: String,
    max_words: u32,
    rules: Vec<String>,
}

/// A parsed persona and its rendered directive.
#[derive(Debug, Clone)]
pub struct Persona {
    name: String,
    max_words: u32,
    directive: String,
}

impl Persona {
    /// The Crumble baking companion.
    pub fn crumble() -> GatewayResult<Self> {
        Self::from_toml(CRUMBLE_TOML)
    }

    pub fn from_toml(text: &str) -> GatewayResult<Self> {
        let file: PersonaFile = toml::from_str(text).map_err(|e| GatewayError::Persona {
            reason: e.to_string(),
        })?;

        if file.metadata.schema_version != "1.0" {
            return Err(GatewayError::Persona {
                reason: format!("unsupported schema version {}", file.metadata.schema_version),
            });
        }

        let p = file.personality;
        if p.name.trim().is_empty() || p.rules.is_empty() {
            return Err(GatewayError::Persona {
                reason: "a persona needs a name and at least one rule".to_string(),
            });
        }

        let rules = p
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| format!("{}. {}", i + 1, rule))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Self {
            directive: format!("{}\n\n{}", p.introduction, rules),
            name: p.name,
            max_words: p.max_words,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_words(&self) -> u32 {
        self.max_words
    }

    /// Instruction text prepended to every prompt.
    pub fn directive(&self) -> &str {
        &self.directive
    }
}
