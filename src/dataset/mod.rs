// ABOUTME: Recipe dataset ingestion and in-memory storage
// ABOUTME: Re-exports the CSV loader, load report, and immutable dataset store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CSV parsing and row validation
pub mod loader;
/// Immutable recipe store
pub mod store;

pub use loader::{load_csv, read_csv, LoadReport};
pub use store::DatasetStore;
