// ABOUTME: Nutrient fields tracked per recipe and selectable as a health focus
// ABOUTME: Maps each nutrient to its dataset column and display unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nutrient field of a recipe record
///
/// Also used as the user's health focus ("craving nutrient"). The focus is
/// carried through a recommendation request but does not change ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Nutrient {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Total fat in grams
    TotalFat,
    /// Cholesterol in milligrams
    Cholesterol,
    /// Sodium in milligrams
    #[default]
    Sodium,
}

impl Nutrient {
    /// Every nutrient, in dataset column order
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Protein,
        Self::TotalFat,
        Self::Cholesterol,
        Self::Sodium,
    ];

    /// Dataset column holding this nutrient
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Calories => columns::CALORIES,
            Self::Protein => columns::PROTEIN,
            Self::TotalFat => columns::TOTAL_FAT,
            Self::Cholesterol => columns::CHOLESTEROL,
            Self::Sodium => columns::SODIUM,
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::TotalFat => "g",
            Self::Cholesterol | Self::Sodium => "mg",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Nutrient name outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown nutrient: {0} (expected one of Calories, Protein, TotalFat, Cholesterol, Sodium)")]
pub struct UnknownNutrient(pub String);

impl FromStr for Nutrient {
    type Err = UnknownNutrient;

    /// Case-insensitive; accepts `total_fat` and `total-fat` for `TotalFat`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.column().to_lowercase() == normalized)
            .ok_or_else(|| UnknownNutrient(s.to_owned()))
    }
}
