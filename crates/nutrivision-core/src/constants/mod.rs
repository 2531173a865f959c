// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dataset column names, recommendation defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Column names of the recipe nutrition dataset
pub mod columns {
    /// Recipe display name
    pub const RECIPE_NAME: &str = "recipe_name";
    /// Food category label matching the classifier vocabulary
    pub const CNN_CATEGORY: &str = "cnn_category";
    /// Free-text ingredient list
    pub const INGREDIENTS: &str = "ingredients";
    /// Precomputed healthiness ranking key
    pub const HEALTHINESS_SCORE: &str = "healthiness_score";
    /// Energy (kcal)
    pub const CALORIES: &str = "Calories";
    /// Protein (g)
    pub const PROTEIN: &str = "Protein";
    /// Total fat (g)
    pub const TOTAL_FAT: &str = "TotalFat";
    /// Cholesterol (mg)
    pub const CHOLESTEROL: &str = "Cholesterol";
    /// Sodium (mg)
    pub const SODIUM: &str = "Sodium";

    /// Columns a dataset must provide to be loadable
    pub const REQUIRED: [&str; 8] = [
        RECIPE_NAME,
        CNN_CATEGORY,
        HEALTHINESS_SCORE,
        CALORIES,
        PROTEIN,
        TOTAL_FAT,
        CHOLESTEROL,
        SODIUM,
    ];
}

/// Recommendation defaults
pub mod recommendation {
    /// Same-category recipes returned when the caller does not say otherwise
    pub const DEFAULT_TOP_N_SAME: usize = 3;
    /// Cross-category alternatives returned when the caller does not say otherwise
    pub const DEFAULT_TOP_N_OTHER_CATEGORY: usize = 3;
    /// Alternatives must have strictly more calories than this
    pub const MIN_ALTERNATIVE_CALORIES: f64 = 120.0;
    /// Alternatives must have strictly more protein (g) than this
    pub const MIN_ALTERNATIVE_PROTEIN_G: f64 = 3.0;
    /// Default result cache capacity (0 disables caching)
    pub const DEFAULT_CACHE_CAPACITY: usize = 128;

    /// Recipe name fragments marking beverages, condiments, and low-value entries
    pub const DEFAULT_EXCLUDED_TERMS: [&str; 15] = [
        "Water",
        "Sauce",
        "Baby",
        "Drink",
        "Cocktail",
        "Punch",
        "Tea",
        "Soda",
        "Juice",
        "Dressing",
        "Smoothie",
        "Pancakes",
        "Batido",
        "Roughy",
        "Milkshake",
    ];
}

/// Environment variable names
pub mod env_config {
    /// Path of the recipe dataset CSV
    pub const DATASET_PATH: &str = "NUTRIVISION_DATASET_PATH";
    /// Same-category list length
    pub const TOP_N_SAME: &str = "NUTRIVISION_TOP_N_SAME";
    /// Alternatives list length
    pub const TOP_N_OTHER: &str = "NUTRIVISION_TOP_N_OTHER";
    /// Calorie floor for alternatives
    pub const MIN_CALORIES: &str = "NUTRIVISION_MIN_CALORIES";
    /// Protein floor for alternatives
    pub const MIN_PROTEIN: &str = "NUTRIVISION_MIN_PROTEIN";
    /// Comma-separated exclusion vocabulary
    pub const EXCLUDED_TERMS: &str = "NUTRIVISION_EXCLUDED_TERMS";
    /// Result cache capacity
    pub const CACHE_CAPACITY: &str = "NUTRIVISION_CACHE_CAPACITY";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default values for application configuration
pub mod defaults {
    /// Dataset file looked up relative to the working directory
    pub const DATASET_PATH: &str = "full_recipes_with_nutrition_and_cnn_class-1.csv";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Service name attached to startup logs
    pub const NUTRIVISION: &str = "nutrivision";
}
