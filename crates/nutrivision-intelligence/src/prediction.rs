// ABOUTME: Decoding of meal image classifier output into a food category and confidence
// ABOUTME: Argmax over the probability vector in category vocabulary order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrivision_core::errors::{AppError, ErrorCode};
use nutrivision_core::models::FoodCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classifier output that cannot be decoded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// Probability vector length differs from the vocabulary size
    #[error("expected {expected} class scores, got {actual}")]
    WrongLength {
        /// Vocabulary size
        expected: usize,
        /// Scores supplied
        actual: usize,
    },
    /// A score is NaN or infinite
    #[error("class score at index {index} is not finite")]
    NonFiniteScore {
        /// Offending index
        index: usize,
    },
}

impl From<PredictionError> for AppError {
    fn from(error: PredictionError) -> Self {
        Self::new(ErrorCode::InvalidInput, error.to_string()).with_source(error)
    }
}

/// Category predicted for a meal photo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierPrediction {
    /// Predicted category
    pub category: FoodCategory,
    /// Probability of the predicted category, as reported by the model
    pub confidence: f64,
}

impl ClassifierPrediction {
    /// Prediction with a known category and confidence
    #[must_use]
    pub const fn new(category: FoodCategory, confidence: f64) -> Self {
        Self {
            category,
            confidence,
        }
    }

    /// Decode a probability vector ordered like `FoodCategory::ALL`
    ///
    /// The first maximum wins on ties.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length is not the vocabulary size or a score is not finite
    pub fn from_scores(scores: &[f64]) -> Result<Self, PredictionError> {
        if scores.len() != FoodCategory::ALL.len() {
            return Err(PredictionError::WrongLength {
                expected: FoodCategory::ALL.len(),
                actual: scores.len(),
            });
        }
        if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
            return Err(PredictionError::NonFiniteScore { index });
        }

        let (index, confidence) = scores
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, score)| {
                if score > best.1 {
                    (i, score)
                } else {
                    best
                }
            });

        FoodCategory::from_class_index(index)
            .map(|category| Self::new(category, confidence))
            .ok_or(PredictionError::WrongLength {
                expected: FoodCategory::ALL.len(),
                actual: scores.len(),
            })
    }

    /// Confidence as a percentage for display
    #[must_use]
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}
