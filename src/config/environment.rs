// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based application configuration

use crate::constants::{defaults, env_config};
use crate::intelligence::config::{ConfigError, RecommendationConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Read a `.env` file from the working directory into the process environment
///
/// Variables already set in the process take precedence. Returns the file
/// path when one was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recipe dataset CSV
    pub dataset_path: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// Recommendation limits, floors, denylist, and cache size
    pub recommendation: RecommendationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(defaults::DATASET_PATH),
            environment: Environment::default(),
            recommendation: RecommendationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Call [`load_dotenv`] beforehand to include variables from a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if a recommendation variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        let dataset_path = env::var(env_config::DATASET_PATH)
            .map_or_else(|_| PathBuf::from(defaults::DATASET_PATH), PathBuf::from);
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let config = Self {
            dataset_path,
            environment,
            recommendation: RecommendationConfig::load()?,
        };
        config.log_summary();
        Ok(config)
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!(
            dataset = %self.dataset_path.display(),
            environment = %self.environment,
            top_n_same = self.recommendation.limits.top_n_same,
            top_n_other = self.recommendation.limits.top_n_other_category,
            min_calories = self.recommendation.thresholds.min_calories,
            min_protein_g = self.recommendation.thresholds.min_protein_g,
            excluded_terms = self.recommendation.exclusions.terms.len(),
            cache_capacity = self.recommendation.cache_capacity,
            "Configuration loaded"
        );
    }
}
