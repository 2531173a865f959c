// ABOUTME: Integration tests for the meal analysis service
// ABOUTME: Exercises CSV-loaded recommendations, classifier decoding, insights, and caching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::{recipe, sample_store};
use nutrivision::dataset::DatasetStore;
use nutrivision::errors::ErrorCode;
use nutrivision::intelligence::config::RecommendationConfig;
use nutrivision::intelligence::{ClassifierPrediction, RecommendationQuery};
use nutrivision::models::{FoodCategory, Nutrient};
use nutrivision::services::MealAnalyzer;
use std::sync::Arc;
use std::thread;

fn analyzer() -> MealAnalyzer {
    MealAnalyzer::new(sample_store(), &RecommendationConfig::default()).unwrap()
}

fn names(recipes: &[nutrivision::models::Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.recipe_name.as_str()).collect()
}

#[test]
fn test_soup_analysis_from_csv() {
    let analysis = analyzer().analyze_label("Soup", None, Nutrient::Sodium);

    assert_eq!(
        names(&analysis.same_category),
        vec!["Tomato Soup", "Lentil Soup", "Chicken Noodle Soup"]
    );
    assert_eq!(
        names(&analysis.alternatives),
        vec!["Baked Salmon", "Egg White Omelette", "Quinoa Bowl"]
    );

    let gauge = analysis.health_gauge.unwrap();
    assert_eq!(gauge.percent, 80);
    assert_eq!(gauge.sample_size, 3);
}

#[test]
fn test_nutrient_comparison_covers_alternatives() {
    let analysis = analyzer().analyze_label("Soup", None, Nutrient::Sodium);

    // Four compared nutrients for three fully populated alternatives
    assert_eq!(analysis.nutrient_comparison.len(), 12);
    assert_eq!(analysis.nutrient_comparison[0].nutrient, Nutrient::Calories);
    assert_eq!(analysis.nutrient_comparison[0].recipe_name, "Baked Salmon");
    assert!(analysis
        .nutrient_comparison
        .iter()
        .all(|row| row.nutrient != Nutrient::Sodium));
}

#[test]
fn test_analyze_decoded_prediction() {
    let mut scores = [0.01; 11];
    scores[FoodCategory::Egg.class_index()] = 0.9;
    let prediction = ClassifierPrediction::from_scores(&scores).unwrap();

    let analysis = analyzer().analyze(&prediction, Nutrient::Cholesterol);

    assert_eq!(analysis.pred_class, "Egg");
    assert_eq!(analysis.confidence, Some(0.9));
    assert_eq!(analysis.craving_nutrient, Nutrient::Cholesterol);
    assert_eq!(names(&analysis.same_category), vec!["Egg White Omelette"]);
    assert!(analysis
        .alternatives
        .iter()
        .all(|r| r.cnn_category != FoodCategory::Egg));
}

#[test]
fn test_unknown_label_has_no_gauge() {
    let analysis = analyzer().analyze_label("Pizza", Some(0.4), Nutrient::Sodium);

    assert!(analysis.same_category.is_empty());
    assert!(analysis.health_gauge.is_none());
    assert_eq!(analysis.alternatives.len(), 3);
}

#[test]
fn test_configured_limits_shape_default_query() {
    let mut config = RecommendationConfig::default();
    config.limits.top_n_same = 1;
    config.limits.top_n_other_category = 10;
    let analyzer = MealAnalyzer::new(sample_store(), &config).unwrap();

    let analysis = analyzer.analyze_label("Soup", None, Nutrient::Sodium);
    assert_eq!(analysis.same_category.len(), 1);
    // Only five alternatives pass every rule in the sample
    assert_eq!(
        names(&analysis.alternatives),
        vec![
            "Baked Salmon",
            "Egg White Omelette",
            "Quinoa Bowl",
            "Grilled Chicken",
            "Peach Cobbler"
        ]
    );
}

#[test]
fn test_explicit_query_overrides_limits() {
    let analyzer = analyzer();
    let query = RecommendationQuery::new("Rice")
        .top_n_same(1)
        .top_n_other_category(0);
    let analysis = analyzer.analyze_query(&query);

    assert_eq!(names(&analysis.same_category), vec!["Rice Cake"]);
    assert!(analysis.alternatives.is_empty());
    assert!(analysis.confidence.is_none());
}

#[test]
fn test_repeat_queries_hit_cache() {
    let analyzer = analyzer();
    let query = analyzer.query("Meat");

    let first = analyzer.recommend(&query);
    let second = analyzer.recommend(&query);

    assert!(Arc::ptr_eq(&first, &second));
    let stats = analyzer.cache_stats().unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_zero_capacity_disables_cache() {
    let config = RecommendationConfig {
        cache_capacity: 0,
        ..RecommendationConfig::default()
    };
    let analyzer = MealAnalyzer::new(sample_store(), &config).unwrap();

    let query = analyzer.query("Meat");
    assert_eq!(*analyzer.recommend(&query), *analyzer.recommend(&query));
    assert!(analyzer.cache_stats().is_none());
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = RecommendationConfig::default();
    config.thresholds.min_calories = f64::NAN;

    let err = MealAnalyzer::new(sample_store(), &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_concurrent_queries_share_analyzer() {
    let analyzer = Arc::new(analyzer());
    let expected = analyzer.analyze_label("Soup", None, Nutrient::Sodium);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || analyzer.analyze_label("Soup", None, Nutrient::Sodium))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_in_memory_store() {
    let store = Arc::new(DatasetStore::from_records(vec![
        recipe("Beef Chili", FoodCategory::Meat, 65.0, 420.0, 28.0),
        recipe("Shrimp Pasta", FoodCategory::NoodlesPasta, 72.0, 510.0, 26.0),
    ]));
    let analyzer = MealAnalyzer::new(store, &RecommendationConfig::default()).unwrap();

    let analysis = analyzer.analyze_label("Meat", None, Nutrient::Protein);
    assert_eq!(names(&analysis.same_category), vec!["Beef Chili"]);
    assert_eq!(names(&analysis.alternatives), vec!["Shrimp Pasta"]);
}
