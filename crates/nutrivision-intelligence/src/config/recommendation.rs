// ABOUTME: Recommendation engine configuration for recipe suggestions
// ABOUTME: Configures result limits, nutritional floors, and the recipe name denylist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Limits on how many recipes each list returns, the nutritional floors an
//! alternative must clear, and the name fragments that disqualify a recipe
//! as a meal alternative.

use nutrivision_core::constants::recommendation;
use serde::{Deserialize, Serialize};

/// Limits on recommendation list sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Default number of same-category recipes
    pub top_n_same: usize,
    /// Default number of cross-category alternatives
    pub top_n_other_category: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            top_n_same: recommendation::DEFAULT_TOP_N_SAME,
            top_n_other_category: recommendation::DEFAULT_TOP_N_OTHER_CATEGORY,
        }
    }
}

/// Nutritional floors for alternatives; both comparisons are strict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeThresholds {
    /// Calories must exceed this value
    pub min_calories: f64,
    /// Protein (g) must exceed this value
    pub min_protein_g: f64,
}

impl Default for AlternativeThresholds {
    fn default() -> Self {
        Self {
            min_calories: recommendation::MIN_ALTERNATIVE_CALORIES,
            min_protein_g: recommendation::MIN_ALTERNATIVE_PROTEIN_G,
        }
    }
}

/// Recipe name denylist for alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Case-insensitive substrings; a match removes the recipe from alternatives
    pub terms: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            terms: recommendation::DEFAULT_EXCLUDED_TERMS
                .iter()
                .map(|t| (*t).to_owned())
                .collect(),
        }
    }
}

impl ExclusionConfig {
    /// Parse a comma-separated term list, dropping blank entries
    #[must_use]
    pub fn from_csv_list(list: &str) -> Self {
        Self {
            terms: list
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Recommendation Engine Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Default list sizes
    pub limits: RecommendationLimits,
    /// Nutritional floors for alternatives
    pub thresholds: AlternativeThresholds,
    /// Recipe name denylist
    pub exclusions: ExclusionConfig,
    /// Memoized result capacity; 0 disables caching
    pub cache_capacity: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limits: RecommendationLimits::default(),
            thresholds: AlternativeThresholds::default(),
            exclusions: ExclusionConfig::default(),
            cache_capacity: recommendation::DEFAULT_CACHE_CAPACITY,
        }
    }
}
