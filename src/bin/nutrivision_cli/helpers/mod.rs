// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for nutrivision-cli
// ABOUTME: Provides access to display formatting utilities

pub mod display;
