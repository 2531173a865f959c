// ABOUTME: Integration tests for recipe dataset loading
// ABOUTME: Covers column validation, row skipping, missing values, and store accessors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::{init_test_logging, write_dataset, write_raw_csv, SAMPLE_ROWS};
use nutrivision::dataset::DatasetStore;
use nutrivision::errors::{AppError, DataLoadError, ErrorCode};
use nutrivision::models::{FoodCategory, Nutrient};

#[test]
fn test_load_keeps_file_order() {
    init_test_logging();
    let file = write_dataset(&SAMPLE_ROWS);
    let store = DatasetStore::load(file.path()).unwrap();

    assert_eq!(store.len(), 12);
    assert!(!store.is_empty());
    assert_eq!(store.recipes()[0].recipe_name, "Chicken Noodle Soup");
    assert_eq!(store.recipes()[11].recipe_name, "Peach Cobbler");
    assert_eq!(store.source(), Some(file.path()));
    assert_eq!(store.report().rows_skipped(), 0);
}

#[test]
fn test_quoted_fields_and_nutrients_parse() {
    init_test_logging();
    let file = write_dataset(&SAMPLE_ROWS);
    let store = DatasetStore::load(file.path()).unwrap();
    let soup = &store.recipes()[0];

    assert_eq!(soup.cnn_category, FoodCategory::Soup);
    assert_eq!(soup.ingredients, "chicken, noodles, carrots");
    assert_eq!(soup.nutrient(Nutrient::Sodium), Some(890.0));
    assert_eq!(store.recipes()[6].cnn_category, FoodCategory::DairyProduct);
}

#[test]
fn test_category_counts() {
    init_test_logging();
    let file = write_dataset(&SAMPLE_ROWS);
    let store = DatasetStore::load(file.path()).unwrap();
    let counts = store.category_counts();

    assert_eq!(counts[&FoodCategory::Soup], 4);
    assert_eq!(counts[&FoodCategory::Rice], 2);
    assert!(!counts.contains_key(&FoodCategory::Bread));
    assert_eq!(store.categories().first(), Some(&FoodCategory::DairyProduct));
}

#[test]
fn test_unrankable_rows_are_reported() {
    init_test_logging();
    let file = write_dataset(&[
        "Lentil Soup,Soup,lentils,81,230,14,3,0,410",
        "No Category,,rice,50,100,1,1,1,1",
        "Calzone,Pizza,dough,60,700,20,30,40,900",
        "Lowercase Soup,soup,broth,70,90,2,1,0,300",
        "Scoreless Rice,Rice,rice,nan,200,4,0,0,2",
    ]);
    let store = DatasetStore::load(file.path()).unwrap();
    let report = store.report();

    assert_eq!(store.len(), 1);
    assert_eq!(report.rows_read, 5);
    assert_eq!(report.skipped_missing_category, 1);
    // Labels are case-sensitive
    assert_eq!(report.skipped_unknown_category, 2);
    assert!(report.unknown_categories.contains("soup"));
    assert_eq!(report.skipped_invalid_score, 1);
}

#[test]
fn test_blank_name_and_extra_columns_kept() {
    init_test_logging();
    let file = write_raw_csv(
        "recipe_name,cnn_category,healthiness_score,Calories,Protein,TotalFat,Cholesterol,Sodium,image_url\n\
         ,Meat,75,300,22,10,60,400,http://img/1.jpg\n",
    );
    let store = DatasetStore::load(file.path()).unwrap();
    let recipe = &store.recipes()[0];

    assert_eq!(recipe.recipe_name, "");
    assert_eq!(recipe.ingredients, "");
    assert_eq!(recipe.extra["image_url"], "http://img/1.jpg");
}

#[test]
fn test_missing_columns_error() {
    init_test_logging();
    let file = write_raw_csv("recipe_name,cnn_category,healthiness_score\nSoup,Soup,50\n");
    let err = DatasetStore::load(file.path()).unwrap_err();

    match &err {
        DataLoadError::MissingColumns { missing, .. } => {
            assert_eq!(
                missing,
                &vec!["Calories", "Protein", "TotalFat", "Cholesterol", "Sodium"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_file_maps_to_dataset_unavailable() {
    let err = DatasetStore::load("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, DataLoadError::NotFound { .. }));

    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::DatasetUnavailable);
}

#[test]
fn test_header_only_file_is_empty_store() {
    init_test_logging();
    let file = write_dataset(&[]);
    let store = DatasetStore::load(file.path()).unwrap();
    assert!(store.is_empty());
    assert!(store.categories().is_empty());
}
