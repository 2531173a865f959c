// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrivision-cli
// ABOUTME: Provides table and JSON rendering for analyses, categories, and load reports

use clap::ValueEnum;
use nutrivision::dataset::LoadReport;
use nutrivision::errors::{AppError, AppResult, ErrorResponse};
use nutrivision::models::{FoodCategory, Nutrient, Recipe};
use nutrivision::services::MealAnalysis;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a failed command; JSON output gets an `ErrorResponse` body on stdout
pub fn display_error(error: &AppError, format: OutputFormat) {
    if format == OutputFormat::Json {
        match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(body) => {
                println!("{body}");
                return;
            }
            Err(e) => eprintln!("Failed to encode error response: {e}"),
        }
    }
    eprintln!("Error: {error}");
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"))
}

fn display_recipe_table(title: &str, recipes: &[Recipe]) {
    println!("\n{title}");
    println!("{}", "=".repeat(96));
    if recipes.is_empty() {
        println!("   (none)");
        return;
    }
    println!(
        "{:>3}  {:<40} {:<16} {:>7} {:>9} {:>8}",
        "#", "Recipe", "Category", "Score", "Calories", "Protein"
    );
    println!("{}", "-".repeat(96));
    for (rank, recipe) in recipes.iter().enumerate() {
        let name = if recipe.recipe_name.is_empty() {
            "(unnamed)"
        } else {
            recipe.recipe_name.as_str()
        };
        println!(
            "{:>3}  {:<40} {:<16} {:>7.1} {:>9} {:>8}",
            rank + 1,
            truncate(name, 40),
            recipe.cnn_category.label(),
            recipe.healthiness_score,
            format_value(recipe.nutrient(Nutrient::Calories)),
            format_value(recipe.nutrient(Nutrient::Protein)),
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

/// Display a meal analysis as tables
pub fn display_analysis(analysis: &MealAnalysis) {
    println!("\nMEAL ANALYSIS");
    println!("{}", "=".repeat(96));
    println!("   Predicted category: {}", analysis.pred_class);
    if let Some(confidence) = analysis.confidence {
        println!("   Confidence: {:.2}%", confidence * 100.0);
    }
    println!(
        "   Focus: {} ({})",
        analysis.craving_nutrient,
        analysis.craving_nutrient.unit()
    );
    match &analysis.health_gauge {
        Some(gauge) => println!(
            "   Category health: {}% (mean of {} recipes)",
            gauge.percent, gauge.sample_size
        ),
        None => println!("   Category health: n/a"),
    }

    display_recipe_table(
        &format!("HEALTHIEST {} RECIPES", analysis.pred_class.to_uppercase()),
        &analysis.same_category,
    );
    display_recipe_table("HEALTHIER ALTERNATIVES", &analysis.alternatives);

    if !analysis.nutrient_comparison.is_empty() {
        println!("\nALTERNATIVES BY NUTRIENT");
        println!("{}", "=".repeat(96));
        for row in &analysis.nutrient_comparison {
            println!(
                "   {:<12} {:<40} {:>9.1} {}",
                row.nutrient.column(),
                truncate(&row.recipe_name, 40),
                row.value,
                row.nutrient.unit()
            );
        }
    }
}

/// Display the category vocabulary with dataset counts
pub fn display_categories(counts: &BTreeMap<FoodCategory, usize>) {
    println!("\nCATEGORIES");
    println!("{}", "=".repeat(40));
    println!("{:>5}  {:<20} {:>10}", "Index", "Label", "Recipes");
    println!("{}", "-".repeat(40));
    for category in FoodCategory::ALL {
        println!(
            "{:>5}  {:<20} {:>10}",
            category.class_index(),
            category.label(),
            counts.get(&category).copied().unwrap_or_default()
        );
    }
    println!("{}", "-".repeat(40));
    println!("{:>5}  {:<20} {:>10}", "", "Total", counts.values().sum::<usize>());
}

/// Display a dataset load report
pub fn display_load_report(source: Option<&Path>, report: &LoadReport) {
    println!("\nDATASET REPORT");
    println!("{}", "=".repeat(50));
    if let Some(path) = source {
        println!("   Source: {}", path.display());
    }
    println!("   Rows read: {}", report.rows_read);
    println!("   Rows loaded: {}", report.rows_loaded);
    println!("   Skipped (missing category): {}", report.skipped_missing_category);
    println!("   Skipped (unknown category): {}", report.skipped_unknown_category);
    println!("   Skipped (invalid score): {}", report.skipped_invalid_score);
    println!("   Unparseable nutrient cells: {}", report.invalid_nutrient_cells);
    if !report.unknown_categories.is_empty() {
        let labels: Vec<&str> = report.unknown_categories.iter().map(String::as_str).collect();
        println!("   Unknown labels: {}", labels.join(", "));
    }
    if report.rows_skipped() == 0 {
        println!("\nSuccess Every row is rankable");
    }
}
