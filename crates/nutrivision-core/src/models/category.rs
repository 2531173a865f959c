// ABOUTME: Food category vocabulary shared by the image classifier and the recipe dataset
// ABOUTME: Closed enumeration of the 11 classifier classes in classifier output order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Food category assigned by the meal image classifier
///
/// Variant order matches the classifier's output index order, so
/// `FoodCategory::ALL[i]` is the class for probability index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodCategory {
    /// Bread and baked goods
    Bread,
    /// Milk, cheese, yogurt
    #[serde(rename = "Dairy product")]
    DairyProduct,
    /// Sweets and desserts
    Dessert,
    /// Egg dishes
    Egg,
    /// Deep-fried dishes
    #[serde(rename = "Fried food")]
    FriedFood,
    /// Meat dishes
    Meat,
    /// Noodles and pasta
    #[serde(rename = "Noodles-Pasta")]
    NoodlesPasta,
    /// Rice dishes
    Rice,
    /// Fish and shellfish
    Seafood,
    /// Soups and stews
    Soup,
    /// Vegetables and fruit
    #[serde(rename = "Vegetable-Fruit")]
    VegetableFruit,
}

impl FoodCategory {
    /// All categories in classifier index order
    pub const ALL: [Self; 11] = [
        Self::Bread,
        Self::DairyProduct,
        Self::Dessert,
        Self::Egg,
        Self::FriedFood,
        Self::Meat,
        Self::NoodlesPasta,
        Self::Rice,
        Self::Seafood,
        Self::Soup,
        Self::VegetableFruit,
    ];

    /// Label used by the classifier and the dataset's `cnn_category` column
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bread => "Bread",
            Self::DairyProduct => "Dairy product",
            Self::Dessert => "Dessert",
            Self::Egg => "Egg",
            Self::FriedFood => "Fried food",
            Self::Meat => "Meat",
            Self::NoodlesPasta => "Noodles-Pasta",
            Self::Rice => "Rice",
            Self::Seafood => "Seafood",
            Self::Soup => "Soup",
            Self::VegetableFruit => "Vegetable-Fruit",
        }
    }

    /// Exact lookup by label; the vocabulary is case-sensitive
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Category for a classifier output index
    #[must_use]
    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this category in the classifier output
    #[must_use]
    pub const fn class_index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label outside the category vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown food category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for FoodCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}
