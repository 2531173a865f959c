// ABOUTME: Configuration module root
// ABOUTME: Re-exports environment-driven application configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variables, deployment mode, and application settings
pub mod environment;

pub use environment::{load_dotenv, AppConfig, Environment};
