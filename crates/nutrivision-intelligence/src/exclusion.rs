// ABOUTME: Case-insensitive recipe name denylist used to filter meal alternatives
// ABOUTME: Compiles the configured terms into a single escaped regex alternation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{ConfigError, ExclusionConfig};
use regex::{Regex, RegexBuilder};

/// Matches recipe names containing any denylisted term
///
/// Matching is a Unicode case-insensitive substring test. Terms are escaped,
/// so punctuation in a term is matched literally. An empty term list matches
/// nothing, and so does an empty recipe name.
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    pattern: Option<Regex>,
    terms: Vec<String>,
}

impl ExclusionMatcher {
    /// Compile a matcher from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the combined pattern exceeds regex size limits
    pub fn new(config: &ExclusionConfig) -> Result<Self, ConfigError> {
        let terms: Vec<String> = config
            .terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();

        let pattern = if terms.is_empty() {
            None
        } else {
            let alternation = terms
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            let compiled = RegexBuilder::new(&alternation)
                .case_insensitive(true)
                .build()
                .map_err(|e| ConfigError::Parse(format!("exclusion terms: {e}")))?;
            Some(compiled)
        };

        Ok(Self { pattern, terms })
    }

    /// Whether the recipe name contains a denylisted term
    #[must_use]
    pub fn is_excluded(&self, recipe_name: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|re| re.is_match(recipe_name))
    }

    /// Terms this matcher was built from
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
