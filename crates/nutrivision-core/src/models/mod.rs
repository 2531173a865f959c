// ABOUTME: Core data models for recipe recommendations
// ABOUTME: Re-exports Recipe, NutrientValues, FoodCategory, and Nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Classifier category vocabulary
pub mod category;
/// Nutrient fields and health focus
pub mod nutrient;
/// Recipe dataset record
pub mod recipe;

pub use category::{FoodCategory, UnknownCategory};
pub use nutrient::{Nutrient, UnknownNutrient};
pub use recipe::{NutrientValues, Recipe};
