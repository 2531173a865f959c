// ABOUTME: Configuration module for nutrivision-intelligence crate
// ABOUTME: Loads recommendation settings from defaults and environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Configuration Module
//!
//! Configuration starts from compiled defaults, applies environment variable
//! overrides, and is validated before use. `RecommendationConfig::global()`
//! memoizes one validated instance for the process.

pub mod error;
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    AlternativeThresholds, ExclusionConfig, RecommendationConfig, RecommendationLimits,
};

use nutrivision_core::constants::env_config;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RECOMMENDATION_CONFIG: OnceLock<RecommendationConfig> = OnceLock::new();

impl RecommendationConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults when the environment holds invalid values.
    pub fn global() -> &'static Self {
        RECOMMENDATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recommendation config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a floor is negative or not finite, or the denylist holds a blank term
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.thresholds;
        if !thresholds.min_calories.is_finite() || thresholds.min_calories < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_calories must be a finite, non-negative number",
            ));
        }
        if !thresholds.min_protein_g.is_finite() || thresholds.min_protein_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_protein_g must be a finite, non-negative number",
            ));
        }

        // A blank term would match every recipe name
        if self.exclusions.terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidRange(
                "exclusion terms must not be blank",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::TOP_N_SAME, &mut self.limits.top_n_same)?;
        Self::apply_env_var(
            env_config::TOP_N_OTHER,
            &mut self.limits.top_n_other_category,
        )?;
        Self::apply_env_var(env_config::MIN_CALORIES, &mut self.thresholds.min_calories)?;
        Self::apply_env_var(env_config::MIN_PROTEIN, &mut self.thresholds.min_protein_g)?;
        Self::apply_env_var(env_config::CACHE_CAPACITY, &mut self.cache_capacity)?;

        if let Ok(list) = env::var(env_config::EXCLUDED_TERMS) {
            self.exclusions = ExclusionConfig::from_csv_list(&list);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = RecommendationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.limits.top_n_same, 3);
        assert_eq!(config.limits.top_n_other_category, 3);
        assert_eq!(config.exclusions.terms.len(), 15);
    }

    #[test]
    fn test_negative_floor_rejected() {
        let mut config = RecommendationConfig::default();
        config.thresholds.min_protein_g = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_blank_term_rejected() {
        let mut config = RecommendationConfig::default();
        config.exclusions.terms.push("  ".to_owned());
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_csv_list_drops_blank_entries() {
        let exclusions = ExclusionConfig::from_csv_list(" Water, ,Sauce,, Tea ");
        assert_eq!(exclusions.terms, vec!["Water", "Sauce", "Tea"]);
    }
}
