// Model configuration options, optionally loaded from TOML

use crate::error::{DomainError, Result};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub loyalty: LoyaltyConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoyaltyConfig {
    // Points taken by one redemption, and the minimum balance needed for it.
    // Zero or negative costs are rejected while parsing.
    pub redemption_cost: NonZeroU32,
}

impl LoyaltyConfig {
    pub fn with_cost(redemption_cost: NonZeroU32) -> Self {
        Self { redemption_cost }
    }

    pub fn cost(&self) -> i64 {
        i64::from(self.redemption_cost.get())
    }
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            redemption_cost: NonZeroU32::new(100).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl ModelConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loading model config");
        Self::from_toml_str(&content)
    }
}
