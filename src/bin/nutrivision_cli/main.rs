// ABOUTME: NutriVision CLI - command-line front end for recipe recommendations
// ABOUTME: Handles recommendation, classifier score analysis, and dataset inspection commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Healthiest soups plus three alternatives
//! nutrivision-cli recommend --category Soup
//!
//! # Longer lists as JSON
//! nutrivision-cli recommend --category "Noodles-Pasta" --top-same 5 --top-other 10 --format json
//!
//! # Decode a classifier probability vector, then recommend
//! nutrivision-cli analyze --scores 0.01,0.02,0.05,0.01,0.02,0.03,0.01,0.05,0.1,0.65,0.05
//!
//! # Category vocabulary with dataset row counts
//! nutrivision-cli categories
//!
//! # Check a dataset file
//! nutrivision-cli validate --dataset recipes.csv
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutrivision::{
    config::{load_dotenv, AppConfig},
    dataset::DatasetStore,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::Nutrient,
    services::MealAnalyzer,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

use helpers::display::{display_error, OutputFormat};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrivision-cli",
    about = "NutriVision recipe recommendations",
    long_about = "Recommend healthier recipes for a meal category predicted from a food photo."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe dataset CSV (overrides NUTRIVISION_DATASET_PATH)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend recipes for a predicted category label
    Recommend {
        /// Category label, e.g. "Soup" or "Dairy product"
        #[arg(long)]
        category: String,

        /// Nutrient focus (Calories, Protein, TotalFat, Cholesterol, Sodium)
        #[arg(long, default_value = "Sodium")]
        focus: Nutrient,

        /// Same-category recipes to return
        #[arg(long)]
        top_same: Option<usize>,

        /// Alternatives to return
        #[arg(long)]
        top_other: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Decode classifier scores and recommend for the predicted category
    Analyze {
        /// Comma-separated class probabilities in category vocabulary order
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        scores: Vec<f64>,

        /// Nutrient focus
        #[arg(long, default_value = "Sodium")]
        focus: Nutrient,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the category vocabulary with dataset row counts
    Categories {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Load the dataset and report skipped rows
    Validate {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Command {
    const fn format(&self) -> OutputFormat {
        match self {
            Self::Recommend { format, .. }
            | Self::Analyze { format, .. }
            | Self::Categories { format }
            | Self::Validate { format } => *format,
        }
    }
}

fn main() -> ExitCode {
    // .env must be in place before logging reads RUST_LOG and LOG_FORMAT
    load_dotenv();
    let cli = Cli::parse();
    let format = cli.command.format();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let config = AppConfig::from_env()?;
    let dataset_path = cli.dataset.unwrap_or_else(|| config.dataset_path.clone());
    info!("Loading dataset: {}", dataset_path.display());
    let store = Arc::new(DatasetStore::load(&dataset_path)?);

    match cli.command {
        Command::Recommend {
            category,
            focus,
            top_same,
            top_other,
            format,
        } => {
            let analyzer = MealAnalyzer::new(store, &config.recommendation)?;
            commands::recommend::recommend(&analyzer, &category, focus, top_same, top_other, format)?;
        }
        Command::Analyze {
            scores,
            focus,
            format,
        } => {
            let analyzer = MealAnalyzer::new(store, &config.recommendation)?;
            commands::recommend::analyze(&analyzer, &scores, focus, format)?;
        }
        Command::Categories { format } => {
            commands::dataset::categories(&store, format)?;
        }
        Command::Validate { format } => {
            commands::dataset::validate(&store, format)?;
        }
    }

    Ok(())
}
