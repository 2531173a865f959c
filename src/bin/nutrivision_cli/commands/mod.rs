// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrivision-cli
// ABOUTME: Provides access to recommendation and dataset inspection commands

pub mod dataset;
pub mod recommend;
