// ABOUTME: Display aggregates computed over recommendation lists
// ABOUTME: Category health gauge and long-form nutrient comparison rows for alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal insights derived from ranked recommendation lists.

use nutrivision_core::models::{Nutrient, Recipe};
use serde::{Deserialize, Serialize};

/// Nutrients compared across alternatives
pub const COMPARED_NUTRIENTS: [Nutrient; 4] = [
    Nutrient::Calories,
    Nutrient::Protein,
    Nutrient::TotalFat,
    Nutrient::Cholesterol,
];

/// Mean healthiness of the recipes shown for the predicted category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthGauge {
    /// Mean `healthiness_score`
    pub mean_score: f64,
    /// Mean truncated to a whole number and clamped to 0..=100
    pub percent: u8,
    /// Recipes averaged
    pub sample_size: usize,
}

impl HealthGauge {
    /// Gauge over a recipe list; `None` for an empty list
    #[must_use]
    pub fn from_recipes(recipes: &[Recipe]) -> Option<Self> {
        if recipes.is_empty() {
            return None;
        }
        let sum: f64 = recipes.iter().map(|r| r.healthiness_score).sum();
        let mean_score = sum / recipes.len() as f64;
        // Safe: clamped to the u8 range before the cast
        let percent = mean_score.trunc().clamp(0.0, 100.0) as u8;
        Some(Self {
            mean_score,
            percent,
            sample_size: recipes.len(),
        })
    }
}

/// One (recipe, nutrient, value) row of the alternatives comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientComparisonRow {
    /// Recipe display name
    pub recipe_name: String,
    /// Compared nutrient
    pub nutrient: Nutrient,
    /// Nutrient amount in the nutrient's unit
    pub value: f64,
}

/// Long-form nutrient rows, grouped by nutrient then recipe order
///
/// Missing values produce no row.
#[must_use]
pub fn nutrient_comparison(recipes: &[Recipe]) -> Vec<NutrientComparisonRow> {
    COMPARED_NUTRIENTS
        .iter()
        .flat_map(|&nutrient| {
            recipes.iter().filter_map(move |recipe| {
                recipe.nutrient(nutrient).map(|value| NutrientComparisonRow {
                    recipe_name: recipe.recipe_name.clone(),
                    nutrient,
                    value,
                })
            })
        })
        .collect()
}
