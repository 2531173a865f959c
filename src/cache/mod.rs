// ABOUTME: Result cache for recommendation queries
// ABOUTME: Bounded in-memory LRU keyed by the full query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory LRU cache implementation
pub mod memory;

pub use memory::{CacheStats, RecommendationCache};
