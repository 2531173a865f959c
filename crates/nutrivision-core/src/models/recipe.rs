// ABOUTME: Recipe record model for the static nutrition dataset
// ABOUTME: One dataset row with category, healthiness score, nutrients, and passthrough columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FoodCategory, Nutrient};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-recipe nutrient values; `None` where the dataset cell is empty or NaN
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientValues {
    /// Energy (kcal)
    #[serde(rename = "Calories")]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(rename = "Protein")]
    pub protein: Option<f64>,
    /// Total fat (g)
    #[serde(rename = "TotalFat")]
    pub total_fat: Option<f64>,
    /// Cholesterol (mg)
    #[serde(rename = "Cholesterol")]
    pub cholesterol: Option<f64>,
    /// Sodium (mg)
    #[serde(rename = "Sodium")]
    pub sodium: Option<f64>,
}

impl NutrientValues {
    /// Value for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
        }
    }

    /// Set a nutrient value; NaN is stored as missing
    pub fn set(&mut self, nutrient: Nutrient, value: Option<f64>) {
        let value = value.filter(|v| !v.is_nan());
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Protein => self.protein = value,
            Nutrient::TotalFat => self.total_fat = value,
            Nutrient::Cholesterol => self.cholesterol = value,
            Nutrient::Sodium => self.sodium = value,
        }
    }
}

/// One row of the recipe nutrition dataset
///
/// `recipe_name` is empty when the dataset cell was blank. `healthiness_score`
/// is a precomputed ranking key (higher is healthier) and is never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name, not unique
    pub recipe_name: String,
    /// Category label shared with the classifier
    pub cnn_category: FoodCategory,
    /// Free-text ingredient list
    #[serde(default)]
    pub ingredients: String,
    /// Precomputed healthiness ranking key
    pub healthiness_score: f64,
    /// Nutrient fields
    #[serde(flatten)]
    pub nutrients: NutrientValues,
    /// Any other dataset columns, kept for display
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Recipe {
    /// Create a recipe with no nutrient data
    pub fn new(
        recipe_name: impl Into<String>,
        cnn_category: FoodCategory,
        healthiness_score: f64,
    ) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            cnn_category,
            ingredients: String::new(),
            healthiness_score,
            nutrients: NutrientValues::default(),
            extra: BTreeMap::new(),
        }
    }

    /// Set a nutrient value
    #[must_use]
    pub fn with_nutrient(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.nutrients.set(nutrient, Some(value));
        self
    }

    /// Set the ingredient text
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Value for a nutrient
    #[must_use]
    pub const fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        self.nutrients.get(nutrient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_nutrient_is_missing() {
        let mut values = NutrientValues::default();
        values.set(Nutrient::Protein, Some(f64::NAN));
        assert_eq!(values.get(Nutrient::Protein), None);
    }

    #[test]
    fn test_serializes_with_dataset_column_names() {
        let recipe = Recipe::new("Lentil Soup", FoodCategory::Soup, 81.5)
            .with_nutrient(Nutrient::Calories, 230.0)
            .with_nutrient(Nutrient::Sodium, 410.0);
        let json = serde_json::to_value(&recipe).unwrap();

        assert_eq!(json["cnn_category"], "Soup");
        assert_eq!(json["Calories"], 230.0);
        assert!(json["Protein"].is_null());
        assert!(json.get("extra").is_none());
    }
}
