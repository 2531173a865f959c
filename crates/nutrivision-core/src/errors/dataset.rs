// ABOUTME: Dataset load error taxonomy for the recipe nutrition table
// ABOUTME: Covers missing sources, IO failures, malformed CSV, and missing required columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup error raised when the recipe dataset cannot be loaded
///
/// A store is never constructed from a failed load, so queries cannot run
/// against a partial dataset. The caller may retry with a corrected source.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The configured source path does not exist
    #[error("dataset source not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The source exists but could not be read
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The source is not well-formed CSV
    #[error("malformed dataset {}: {reason}", path.display())]
    Csv {
        /// Path being parsed
        path: PathBuf,
        /// Parser message; the csv error type stays out of this crate
        reason: String,
    },

    /// The header row lacks one or more required columns
    #[error("dataset {} is missing required columns: {}", path.display(), missing.join(", "))]
    MissingColumns {
        /// Path being parsed
        path: PathBuf,
        /// Required column names absent from the header
        missing: Vec<String>,
    },
}

impl DataLoadError {
    /// Path of the source that failed to load
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Csv { path, .. }
            | Self::MissingColumns { path, .. } => path,
        }
    }
}

impl From<DataLoadError> for AppError {
    fn from(error: DataLoadError) -> Self {
        let code = match &error {
            DataLoadError::NotFound { .. } | DataLoadError::Io { .. } => {
                ErrorCode::DatasetUnavailable
            }
            DataLoadError::Csv { .. } | DataLoadError::MissingColumns { .. } => {
                ErrorCode::InvalidFormat
            }
        };
        let details = match &error {
            DataLoadError::MissingColumns { missing, .. } => serde_json::json!({
                "path": error.path().display().to_string(),
                "missing_columns": missing,
            }),
            _ => serde_json::json!({ "path": error.path().display().to_string() }),
        };
        Self::new(code, error.to_string())
            .with_details(details)
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_maps_to_invalid_format() {
        let error = DataLoadError::MissingColumns {
            path: PathBuf::from("recipes.csv"),
            missing: vec!["Protein".to_owned(), "Sodium".to_owned()],
        };
        assert_eq!(
            error.to_string(),
            "dataset recipes.csv is missing required columns: Protein, Sodium"
        );

        let app: AppError = error.into();
        assert_eq!(app.code, ErrorCode::InvalidFormat);
        assert_eq!(app.details["missing_columns"][1], "Sodium");
    }

    #[test]
    fn test_not_found_maps_to_dataset_unavailable() {
        let app: AppError = DataLoadError::NotFound {
            path: PathBuf::from("/nope.csv"),
        }
        .into();
        assert_eq!(app.code, ErrorCode::DatasetUnavailable);
        assert!(app.code.is_recoverable());
    }
}
