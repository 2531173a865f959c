// ABOUTME: Dataset inspection commands for nutrivision-cli
// ABOUTME: Handles category listing and load report operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrivision::{dataset::DatasetStore, errors::AppResult, models::FoodCategory};
use serde_json::json;

use crate::helpers::display::{display_categories, display_load_report, print_json, OutputFormat};

type Result<T> = AppResult<T>;

/// List the category vocabulary with dataset row counts
pub fn categories(store: &DatasetStore, format: OutputFormat) -> Result<()> {
    let counts = store.category_counts();
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = FoodCategory::ALL
                .iter()
                .map(|category| {
                    json!({
                        "index": category.class_index(),
                        "label": category.label(),
                        "recipes": counts.get(category).copied().unwrap_or_default(),
                    })
                })
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Table => display_categories(&counts),
    }
    Ok(())
}

/// Print the dataset load report
pub fn validate(store: &DatasetStore, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "source": store.source().map(|p| p.display().to_string()),
            "loaded_at": store.loaded_at().to_rfc3339(),
            "report": store.report(),
        }))?,
        OutputFormat::Table => display_load_report(store.source(), store.report()),
    }
    Ok(())
}
