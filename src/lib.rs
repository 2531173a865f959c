// ABOUTME: Main library entry point for the NutriVision recipe recommendation service
// ABOUTME: Wires dataset loading, configuration, logging, caching, and meal analysis together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriVision
//!
//! Recipe recommendations for a photographed meal. An external image
//! classifier assigns the meal a food category; this crate answers with the
//! healthiest recipes in that category and healthier alternatives from other
//! categories, ranked by a precomputed healthiness score.
//!
//! ## Architecture
//!
//! - **`nutrivision-core`**: recipe models, category vocabulary, errors, constants
//! - **`nutrivision-intelligence`**: the ranking engine, denylist, classifier decoding
//! - **Dataset**: CSV ingestion into an immutable in-memory store
//! - **Services**: the meal analyzer shared by every caller
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrivision::config::AppConfig;
//! use nutrivision::dataset::DatasetStore;
//! use nutrivision::errors::AppResult;
//! use nutrivision::models::Nutrient;
//! use nutrivision::services::MealAnalyzer;
//! use std::sync::Arc;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let store = Arc::new(DatasetStore::load(&config.dataset_path)?);
//!     let analyzer = MealAnalyzer::new(store, &config.recommendation)?;
//!
//!     let analysis = analyzer.analyze_label("Soup", None, Nutrient::Sodium);
//!     println!("{} alternatives", analysis.alternatives.len());
//!     Ok(())
//! }
//! ```

// Re-exports from the core crate so callers need a single dependency
pub use nutrivision_core::{constants, errors, models};

/// Recommendation engine crate
pub use nutrivision_intelligence as intelligence;

/// Recommendation result caching
pub mod cache;

/// Environment-driven application configuration
pub mod config;

/// Recipe dataset ingestion and storage
pub mod dataset;

/// Structured logging setup
pub mod logging;

/// Meal analysis service
pub mod services;
