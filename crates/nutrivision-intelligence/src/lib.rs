// ABOUTME: Recipe recommendation engine, eligibility filters, and meal insights
// ABOUTME: Extracted from main crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Safe: recipe counts are far below 2^52
#![allow(clippy::cast_possible_truncation)] // Safe: gauge values are clamped first
#![allow(clippy::cast_sign_loss)] // Safe: gauge values are clamped first

//! # NutriVision Intelligence
//!
//! Ranking logic for recipe recommendations. The engine is a pure function
//! of a read-only recipe slice and a query; datasets plug in through
//! [`RecipeSource`].

/// Recommendation configuration and environment loading
pub mod config;
/// Recipe name denylist
pub mod exclusion;
/// Display aggregates over recommendation lists
pub mod insights;
/// Classifier output decoding
pub mod prediction;
/// Recommendation engine
pub mod recommendation_engine;

pub use config::{ConfigError, RecommendationConfig};
pub use exclusion::ExclusionMatcher;
pub use insights::{nutrient_comparison, HealthGauge, NutrientComparisonRow};
pub use prediction::{ClassifierPrediction, PredictionError};
pub use recommendation_engine::{
    Ineligibility, RecommendationEngine, RecommendationQuery, Recommendations,
};

use nutrivision_core::models::Recipe;

/// Read-only, ordered access to a recipe dataset
pub trait RecipeSource {
    /// Records in dataset order
    fn recipes(&self) -> &[Recipe];
}

impl RecipeSource for [Recipe] {
    fn recipes(&self) -> &[Recipe] {
        self
    }
}

impl RecipeSource for Vec<Recipe> {
    fn recipes(&self) -> &[Recipe] {
        self
    }
}
