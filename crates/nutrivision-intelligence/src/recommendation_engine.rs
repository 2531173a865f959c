// ABOUTME: Recipe recommendation engine ranking same-category picks and healthier alternatives
// ABOUTME: Applies category partition, name denylist, nutritional floors, and stable score ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe recommendation engine
//!
//! Given the category predicted for a meal photo, the engine returns two
//! bounded lists ranked by `healthiness_score`, highest first:
//!
//! - the healthiest recipes in the predicted category;
//! - healthier alternatives from every other category, restricted to recipes
//!   whose name is not denylisted and whose calories and protein clear the
//!   configured floors.
//!
//! Ranking is a stable sort, so recipes with equal scores keep dataset order
//! and identical queries always return identical lists.

use crate::config::{AlternativeThresholds, ConfigError, RecommendationConfig, RecommendationLimits};
use crate::exclusion::ExclusionMatcher;
use crate::RecipeSource;
use nutrivision_core::models::{FoodCategory, Nutrient, Recipe};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Parameters of one recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationQuery {
    /// Category label predicted by the classifier; not validated against the vocabulary
    pub pred_class: String,
    /// User's nutrient focus; carried through, does not affect ranking
    pub craving_nutrient: Nutrient,
    /// Maximum same-category recipes; 0 yields an empty list
    pub top_n_same: usize,
    /// Maximum alternatives; 0 yields an empty list
    pub top_n_other_category: usize,
}

impl RecommendationQuery {
    /// Query with default focus (Sodium) and default list sizes
    pub fn new(pred_class: impl Into<String>) -> Self {
        Self::with_limits(pred_class, &RecommendationLimits::default())
    }

    /// Query sized by configured limits
    pub fn with_limits(pred_class: impl Into<String>, limits: &RecommendationLimits) -> Self {
        Self {
            pred_class: pred_class.into(),
            craving_nutrient: Nutrient::default(),
            top_n_same: limits.top_n_same,
            top_n_other_category: limits.top_n_other_category,
        }
    }

    /// Set the nutrient focus
    #[must_use]
    pub fn focus(mut self, nutrient: Nutrient) -> Self {
        self.craving_nutrient = nutrient;
        self
    }

    /// Set the same-category list size
    #[must_use]
    pub fn top_n_same(mut self, n: usize) -> Self {
        self.top_n_same = n;
        self
    }

    /// Set the alternatives list size
    #[must_use]
    pub fn top_n_other_category(mut self, n: usize) -> Self {
        self.top_n_other_category = n;
        self
    }
}

/// Ranked recommendation lists for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Category label exactly as supplied
    pub pred_class: String,
    /// Nutrient focus of the request
    pub craving_nutrient: Nutrient,
    /// Healthiest recipes in the predicted category
    pub same_category: Vec<Recipe>,
    /// Healthiest eligible recipes from other categories
    pub alternatives: Vec<Recipe>,
}

impl Recommendations {
    /// Split into `(pred_class, same_category, alternatives)`
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Recipe>, Vec<Recipe>) {
        (self.pred_class, self.same_category, self.alternatives)
    }
}

/// Why a recipe cannot be offered as an alternative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ineligibility {
    /// Recipe belongs to the predicted category
    SameCategory,
    /// Recipe name contains a denylisted term
    ExcludedName,
    /// Calories missing or not above the floor
    CaloriesTooLow,
    /// Protein missing or not above the floor
    ProteinTooLow,
}

/// Recipe recommendation engine
///
/// Holds only configuration; the dataset is passed to each call, so one
/// engine serves any number of concurrent queries.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    thresholds: AlternativeThresholds,
    exclusions: ExclusionMatcher,
}

impl RecommendationEngine {
    /// Create an engine from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the exclusion terms cannot be compiled
    pub fn new(config: &RecommendationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            thresholds: config.thresholds.clone(),
            exclusions: ExclusionMatcher::new(&config.exclusions)?,
        })
    }

    /// Name denylist in effect
    #[must_use]
    pub const fn exclusions(&self) -> &ExclusionMatcher {
        &self.exclusions
    }

    /// Rank same-category recipes and cross-category alternatives
    ///
    /// An unknown `pred_class` is not an error: the same-category list is
    /// empty and alternatives are drawn from the whole dataset.
    pub fn recommend<D>(&self, dataset: &D, query: &RecommendationQuery) -> Recommendations
    where
        D: RecipeSource + ?Sized,
    {
        let recipes = dataset.recipes();
        let predicted = FoodCategory::from_label(&query.pred_class);

        let same_category = predicted.map_or_else(Vec::new, |category| {
            top_ranked(
                recipes
                    .iter()
                    .filter(|r| r.cnn_category == category)
                    .collect(),
                query.top_n_same,
            )
        });

        let candidates: Vec<&Recipe> = recipes
            .par_iter()
            .filter(|r| self.check_alternative(r, predicted).is_ok())
            .collect();
        let candidate_count = candidates.len();
        let alternatives = top_ranked(candidates, query.top_n_other_category);

        debug!(
            pred_class = %query.pred_class,
            known_category = predicted.is_some(),
            craving_nutrient = %query.craving_nutrient,
            same_category = same_category.len(),
            alternative_candidates = candidate_count,
            alternatives = alternatives.len(),
            "Recipe recommendations ranked"
        );

        Recommendations {
            pred_class: query.pred_class.clone(),
            craving_nutrient: query.craving_nutrient,
            same_category,
            alternatives,
        }
    }

    /// Check whether a recipe may be offered as an alternative
    ///
    /// # Errors
    ///
    /// Returns the first rule the recipe fails, checked in the order
    /// category, name, calories, protein
    pub fn check_alternative(
        &self,
        recipe: &Recipe,
        predicted: Option<FoodCategory>,
    ) -> Result<(), Ineligibility> {
        if predicted == Some(recipe.cnn_category) {
            return Err(Ineligibility::SameCategory);
        }
        if self.exclusions.is_excluded(&recipe.recipe_name) {
            return Err(Ineligibility::ExcludedName);
        }
        // Missing values fail the strict comparison
        if !exceeds(recipe.nutrient(Nutrient::Calories), self.thresholds.min_calories) {
            return Err(Ineligibility::CaloriesTooLow);
        }
        if !exceeds(recipe.nutrient(Nutrient::Protein), self.thresholds.min_protein_g) {
            return Err(Ineligibility::ProteinTooLow);
        }
        Ok(())
    }
}

fn exceeds(value: Option<f64>, floor: f64) -> bool {
    value.is_some_and(|v| v > floor)
}

/// Stable descending sort by score, truncated to `n` owned records
fn top_ranked(mut recipes: Vec<&Recipe>, n: usize) -> Vec<Recipe> {
    if n == 0 {
        return Vec::new();
    }
    recipes.sort_by(|a, b| {
        b.healthiness_score
            .partial_cmp(&a.healthiness_score)
            .unwrap_or(Ordering::Equal)
    });
    recipes.into_iter().take(n).cloned().collect()
}
