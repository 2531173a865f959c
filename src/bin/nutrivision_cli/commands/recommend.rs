// ABOUTME: Recommendation commands for nutrivision-cli
// ABOUTME: Handles recommend-by-label and analyze-from-classifier-scores operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrivision::{
    errors::AppResult, intelligence::ClassifierPrediction, models::FoodCategory, models::Nutrient,
    services::MealAnalyzer,
};
use tracing::{info, warn};

use crate::helpers::display::{display_analysis, print_json, OutputFormat};

type Result<T> = AppResult<T>;

/// Recommend recipes for a category label
pub fn recommend(
    analyzer: &MealAnalyzer,
    category: &str,
    focus: Nutrient,
    top_same: Option<usize>,
    top_other: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    if FoodCategory::from_label(category).is_none() {
        warn!(
            category,
            "Label is not in the category vocabulary; same-category list will be empty"
        );
    }

    let mut query = analyzer.query(category).focus(focus);
    if let Some(n) = top_same {
        query = query.top_n_same(n);
    }
    if let Some(n) = top_other {
        query = query.top_n_other_category(n);
    }

    let analysis = analyzer.analyze_query(&query);
    match format {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Table => display_analysis(&analysis),
    }
    Ok(())
}

/// Decode classifier scores, then recommend for the predicted category
pub fn analyze(
    analyzer: &MealAnalyzer,
    scores: &[f64],
    focus: Nutrient,
    format: OutputFormat,
) -> Result<()> {
    let prediction = ClassifierPrediction::from_scores(scores)?;
    info!(
        category = %prediction.category,
        confidence = prediction.confidence,
        "Classifier scores decoded"
    );

    let analysis = analyzer.analyze(&prediction, focus);
    match format {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Table => display_analysis(&analysis),
    }
    Ok(())
}
