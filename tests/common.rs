// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, recipe fixtures, and temporary CSV dataset helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrivision`

use nutrivision::dataset::DatasetStore;
use nutrivision::models::{FoodCategory, Nutrient, Recipe};
use std::io::Write;
use std::sync::{Arc, Once};
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Dataset header in the column order of the production CSV
pub const CSV_HEADER: &str =
    "recipe_name,cnn_category,ingredients,healthiness_score,Calories,Protein,TotalFat,Cholesterol,Sodium";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Recipe with calories and protein set
pub fn recipe(name: &str, category: FoodCategory, score: f64, kcal: f64, protein: f64) -> Recipe {
    Recipe::new(name, category, score)
        .with_nutrient(Nutrient::Calories, kcal)
        .with_nutrient(Nutrient::Protein, protein)
}

/// Write CSV rows under the standard header to a temporary file
pub fn write_dataset(rows: &[&str]) -> NamedTempFile {
    let mut contents = format!("{CSV_HEADER}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    write_raw_csv(&contents)
}

/// Write arbitrary CSV text to a temporary file
pub fn write_raw_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Rows of a small dataset covering every ranking rule
pub const SAMPLE_ROWS: [&str; 12] = [
    "Chicken Noodle Soup,Soup,\"chicken, noodles, carrots\",70,180,12,4,25,890",
    "Grilled Chicken,Meat,\"chicken, olive oil\",85,250,30,9,85,320",
    "Tomato Soup,Soup,\"tomatoes, basil\",90,150,4,5,0,700",
    "Orange Juice,Vegetable-Fruit,oranges,99,150,1,0,0,2",
    "Minestrone,Soup,\"beans, pasta, tomato\",50,200,8,3,0,640",
    "Baked Salmon,Seafood,\"salmon, lemon\",92,320,34,14,95,210",
    "Caesar Dressing,Dairy product,\"parmesan, egg\",97,400,5,40,60,900",
    "Lentil Soup,Soup,\"lentils, cumin\",80,220,14,3,0,410",
    "Rice Cake,Rice,rice,96,35,0.7,0.3,0,20",
    "Egg White Omelette,Egg,\"egg whites, spinach\",88,121,3.5,0.5,0,180",
    "Quinoa Bowl,Rice,\"quinoa, chickpeas\",88,400,14,12,0,300",
    "Peach Cobbler,Dessert,\"peaches, flour, butter\",40,350,4,15,40,250",
];

/// Store loaded from `SAMPLE_ROWS` through the CSV loader
pub fn sample_store() -> Arc<DatasetStore> {
    init_test_logging();
    let file = write_dataset(&SAMPLE_ROWS);
    Arc::new(DatasetStore::load(file.path()).expect("load sample dataset"))
}
