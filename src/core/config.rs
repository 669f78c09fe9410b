//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::board::VariantConfig;

/// Configuration for a new game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the dice stream.
    /// Same seed and same players produce the same game.
    pub seed: u64,

    /// Board layout to build.
    pub variant: VariantConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            variant: VariantConfig::classic(),
        }
    }
}

impl EngineConfig {
    /// Use a different dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a different board variant.
    #[must_use]
    pub fn with_variant(mut self, variant: VariantConfig) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.variant.name, "classic");
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_variant(VariantConfig::short());

        assert_eq!(config.seed, 123);
        assert_eq!(config.variant.name, "short");
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.variant, deserialized.variant);
    }
}
