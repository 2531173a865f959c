// ABOUTME: Domain service layer combining the dataset, engine, and cache
// ABOUTME: Provides caller-agnostic meal analysis reused by the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the process-wide dataset and configured engine so every
//! caller gets the same ranking rules regardless of the entry point.

/// Meal photo analysis: prediction decoding, recommendations, and insights
pub mod analysis;

pub use analysis::{MealAnalysis, MealAnalyzer};
