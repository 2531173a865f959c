// ABOUTME: Meal analysis service turning a classifier prediction into recommendations
// ABOUTME: Wraps the recommendation engine with the loaded dataset, result cache, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::{CacheStats, RecommendationCache};
use crate::dataset::DatasetStore;
use crate::errors::AppResult;
use crate::intelligence::config::{RecommendationConfig, RecommendationLimits};
use crate::intelligence::{
    nutrient_comparison, ClassifierPrediction, HealthGauge, NutrientComparisonRow,
    RecommendationEngine, RecommendationQuery, Recommendations,
};
use crate::models::{Nutrient, Recipe};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything shown to a user for one analyzed meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// Predicted category label
    pub pred_class: String,
    /// Classifier probability for the label, when known
    pub confidence: Option<f64>,
    /// Nutrient focus of the request
    pub craving_nutrient: Nutrient,
    /// Healthiest recipes in the predicted category
    pub same_category: Vec<Recipe>,
    /// Healthier alternatives from other categories
    pub alternatives: Vec<Recipe>,
    /// Mean healthiness of the same-category list
    pub health_gauge: Option<HealthGauge>,
    /// Nutrient rows for charting the alternatives
    pub nutrient_comparison: Vec<NutrientComparisonRow>,
}

impl MealAnalysis {
    fn from_recommendations(recommendations: &Recommendations, confidence: Option<f64>) -> Self {
        Self {
            pred_class: recommendations.pred_class.clone(),
            confidence,
            craving_nutrient: recommendations.craving_nutrient,
            same_category: recommendations.same_category.clone(),
            alternatives: recommendations.alternatives.clone(),
            health_gauge: HealthGauge::from_recipes(&recommendations.same_category),
            nutrient_comparison: nutrient_comparison(&recommendations.alternatives),
        }
    }
}

/// Meal analysis service
///
/// Owns a shared handle to the immutable dataset and a configured engine.
/// All methods take `&self`, so one analyzer can serve concurrent callers.
#[derive(Debug)]
pub struct MealAnalyzer {
    store: Arc<DatasetStore>,
    engine: RecommendationEngine,
    limits: RecommendationLimits,
    cache: Option<RecommendationCache>,
}

impl MealAnalyzer {
    /// Create an analyzer over a loaded dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(store: Arc<DatasetStore>, config: &RecommendationConfig) -> AppResult<Self> {
        config.validate()?;
        let engine = RecommendationEngine::new(config)?;
        let cache = RecommendationCache::with_capacity(config.cache_capacity);

        info!(
            recipes = store.len(),
            cache_enabled = cache.is_some(),
            "Meal analyzer ready"
        );

        Ok(Self {
            store,
            engine,
            limits: config.limits.clone(),
            cache,
        })
    }

    /// Query for a label using the configured list sizes
    #[must_use]
    pub fn query(&self, pred_class: impl Into<String>) -> RecommendationQuery {
        RecommendationQuery::with_limits(pred_class, &self.limits)
    }

    /// Ranked lists for a query, served from the cache when enabled
    pub fn recommend(&self, query: &RecommendationQuery) -> Arc<Recommendations> {
        let compute = || self.engine.recommend(self.store.as_ref(), query);
        match &self.cache {
            Some(cache) => cache.get_or_insert_with(query, compute),
            None => Arc::new(compute()),
        }
    }

    /// Analyze a decoded classifier prediction
    #[instrument(skip(self), fields(category = %prediction.category))]
    pub fn analyze(&self, prediction: &ClassifierPrediction, focus: Nutrient) -> MealAnalysis {
        let query = self.query(prediction.category.label()).focus(focus);
        let recommendations = self.recommend(&query);
        MealAnalysis::from_recommendations(&recommendations, Some(prediction.confidence))
    }

    /// Analyze a raw category label, which need not be in the vocabulary
    #[must_use]
    pub fn analyze_label(
        &self,
        pred_class: &str,
        confidence: Option<f64>,
        focus: Nutrient,
    ) -> MealAnalysis {
        let query = self.query(pred_class).focus(focus);
        MealAnalysis::from_recommendations(&self.recommend(&query), confidence)
    }

    /// Analyze a fully specified query
    #[must_use]
    pub fn analyze_query(&self, query: &RecommendationQuery) -> MealAnalysis {
        MealAnalysis::from_recommendations(&self.recommend(query), None)
    }

    /// Cache counters, when caching is enabled
    #[must_use]
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(RecommendationCache::stats)
    }
}
