// ABOUTME: Core types and constants for the NutriVision recipe recommendation platform
// ABOUTME: Foundation crate with error handling, recipe models, and dataset constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriVision Core
//!
//! Foundation crate providing shared types and constants for the NutriVision
//! recommendation platform. Both the intelligence crate and the application
//! crate depend on it, so it is kept small and changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DataLoadError`
//! - **constants**: Dataset column names and recommendation defaults
//! - **models**: `Recipe`, `FoodCategory`, and `Nutrient`

/// Unified error handling system with standard error codes
pub mod errors;

/// Dataset column names and recommendation defaults
pub mod constants;

/// Core data models (Recipe, `FoodCategory`, Nutrient)
pub mod models;
