// ABOUTME: Immutable in-memory recipe store loaded once at startup
// ABOUTME: Provides ordered, read-only access to recipes plus category statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::loader::{load_csv, LoadReport};
use crate::errors::DataLoadError;
use crate::intelligence::RecipeSource;
use crate::models::{FoodCategory, Recipe};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Recipe dataset held in memory
///
/// Records keep file order, which is what makes tie-breaking in the
/// recommendation engine deterministic. The store is never mutated after
/// construction and can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    recipes: Vec<Recipe>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
    report: LoadReport,
}

impl DatasetStore {
    /// Load the dataset from a CSV file
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` when the file cannot be read, is malformed,
    /// or lacks required columns
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let started = Instant::now();
        let (recipes, report) = load_csv(path)?;

        info!(
            path = %path.display(),
            recipes = recipes.len(),
            skipped = report.rows_skipped(),
            elapsed_ms = started.elapsed().as_millis(),
            "Recipe dataset loaded"
        );

        Ok(Self {
            recipes,
            source: Some(path.to_path_buf()),
            loaded_at: Utc::now(),
            report,
        })
    }

    /// Build a store from records already in memory
    #[must_use]
    pub fn from_records(recipes: Vec<Recipe>) -> Self {
        let report = LoadReport {
            rows_read: recipes.len(),
            rows_loaded: recipes.len(),
            ..LoadReport::default()
        };
        Self {
            recipes,
            source: None,
            loaded_at: Utc::now(),
            report,
        }
    }

    /// Records in dataset order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// File the store was loaded from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Load timestamp
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Ingestion statistics
    #[must_use]
    pub const fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Categories present in the dataset, in classifier order
    #[must_use]
    pub fn categories(&self) -> Vec<FoodCategory> {
        self.category_counts().into_keys().collect()
    }

    /// Record count per category present in the dataset
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<FoodCategory, usize> {
        self.recipes
            .iter()
            .fold(BTreeMap::new(), |mut counts, recipe| {
                *counts.entry(recipe.cnn_category).or_insert(0) += 1;
                counts
            })
    }
}

impl RecipeSource for DatasetStore {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
