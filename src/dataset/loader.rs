// ABOUTME: CSV loader for the recipe nutrition dataset
// ABOUTME: Validates required columns, parses rows, and counts rows skipped at ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns;
use crate::errors::DataLoadError;
use crate::models::{FoodCategory, Nutrient, NutrientValues, Recipe};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Cell values treated as missing
const MISSING_MARKERS: [&str; 6] = ["", "nan", "na", "n/a", "null", "none"];

/// Outcome of a dataset load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows read from the source
    pub rows_read: usize,
    /// Rows kept in the dataset
    pub rows_loaded: usize,
    /// Rows dropped because `cnn_category` was blank
    pub skipped_missing_category: usize,
    /// Rows dropped because `cnn_category` is outside the vocabulary
    pub skipped_unknown_category: usize,
    /// Rows dropped because `healthiness_score` was blank or not a finite number
    pub skipped_invalid_score: usize,
    /// Nutrient cells that were not numbers and were loaded as missing
    pub invalid_nutrient_cells: usize,
    /// Distinct out-of-vocabulary category labels seen
    pub unknown_categories: BTreeSet<String>,
}

impl LoadReport {
    /// Rows dropped for any reason
    #[must_use]
    pub const fn rows_skipped(&self) -> usize {
        self.skipped_missing_category + self.skipped_unknown_category + self.skipped_invalid_score
    }
}

/// Column positions resolved from the header row
struct ColumnIndex {
    recipe_name: usize,
    cnn_category: usize,
    healthiness_score: usize,
    ingredients: Option<usize>,
    nutrients: [(Nutrient, usize); 5],
    extra: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, DataLoadError> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim(), idx))
            .collect();

        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|name| !positions.contains_key(*name))
            .map(|name| (*name).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns {
                path: path.to_path_buf(),
                missing,
            });
        }

        let known: BTreeSet<&str> = columns::REQUIRED
            .iter()
            .copied()
            .chain([columns::INGREDIENTS])
            .collect();
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !known.contains(name.trim()))
            .map(|(idx, name)| (idx, name.trim().to_owned()))
            .collect();

        // Presence of every required column was checked above
        let at = |name: &str| positions.get(name).copied().unwrap_or_default();
        Ok(Self {
            recipe_name: at(columns::RECIPE_NAME),
            cnn_category: at(columns::CNN_CATEGORY),
            healthiness_score: at(columns::HEALTHINESS_SCORE),
            ingredients: positions.get(columns::INGREDIENTS).copied(),
            nutrients: Nutrient::ALL.map(|n| (n, at(n.column()))),
            extra,
        })
    }
}

/// Parse a numeric cell; missing markers and unparseable text yield `None`
fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if MISSING_MARKERS.contains(&trimmed.to_lowercase().as_str()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim().to_lowercase().as_str())
}

/// Read recipes from a CSV file
///
/// # Errors
///
/// Returns `DataLoadError` if the file is missing or unreadable, is not
/// well-formed CSV, or lacks a required column
pub fn load_csv(path: &Path) -> Result<(Vec<Recipe>, LoadReport), DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, path)
}

/// Read recipes from any CSV reader; `path` is used for error reporting
///
/// # Errors
///
/// Returns `DataLoadError` if the input is not well-formed CSV, lacks a
/// required column, or has a row with more fields than the header
pub fn read_csv<R: Read>(input: R, path: &Path) -> Result<(Vec<Recipe>, LoadReport), DataLoadError> {
    let csv_error = |e: csv::Error| {
        if e.is_io_error() {
            let source = match e.into_kind() {
                csv::ErrorKind::Io(io_err) => io_err,
                _ => io::Error::other("csv io error"),
            };
            DataLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        } else {
            DataLoadError::Csv {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    };

    // Short rows are padded with missing cells; long rows are rejected below
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let index = ColumnIndex::resolve(&headers, path)?;

    let mut recipes = Vec::new();
    let mut report = LoadReport::default();

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        if record.len() > headers.len() {
            return Err(DataLoadError::Csv {
                path: path.to_path_buf(),
                reason: format!(
                    "record on line {} has {} fields, header has {}",
                    record.position().map_or(row + 2, |pos| pos.line() as usize),
                    record.len(),
                    headers.len()
                ),
            });
        }
        report.rows_read += 1;
        if let Some(recipe) = parse_row(&record, &index, &mut report, row) {
            recipes.push(recipe);
        }
    }
    report.rows_loaded = recipes.len();

    if report.rows_skipped() > 0 {
        warn!(
            path = %path.display(),
            missing_category = report.skipped_missing_category,
            unknown_category = report.skipped_unknown_category,
            invalid_score = report.skipped_invalid_score,
            unknown_labels = ?report.unknown_categories,
            "Skipped unrankable dataset rows"
        );
    }

    Ok((recipes, report))
}

fn parse_row(
    record: &StringRecord,
    index: &ColumnIndex,
    report: &mut LoadReport,
    row: usize,
) -> Option<Recipe> {
    let cell = |idx: usize| record.get(idx).unwrap_or_default();

    let category_label = cell(index.cnn_category).trim();
    if is_missing(category_label) {
        report.skipped_missing_category += 1;
        debug!(row, "Row has no cnn_category");
        return None;
    }
    let Some(cnn_category) = FoodCategory::from_label(category_label) else {
        report.skipped_unknown_category += 1;
        report.unknown_categories.insert(category_label.to_owned());
        return None;
    };

    let Some(healthiness_score) =
        parse_number(cell(index.healthiness_score)).filter(|s| s.is_finite())
    else {
        report.skipped_invalid_score += 1;
        debug!(row, "Row has no usable healthiness_score");
        return None;
    };

    let mut nutrients = NutrientValues::default();
    for (nutrient, idx) in index.nutrients {
        let raw = cell(idx);
        let value = parse_number(raw);
        if value.is_none() && !is_missing(raw) {
            report.invalid_nutrient_cells += 1;
        }
        nutrients.set(nutrient, value);
    }

    let recipe_name = cell(index.recipe_name);
    Some(Recipe {
        recipe_name: if is_missing(recipe_name) {
            String::new()
        } else {
            recipe_name.to_owned()
        },
        cnn_category,
        ingredients: index.ingredients.map(cell).unwrap_or_default().to_owned(),
        healthiness_score,
        nutrients,
        extra: index
            .extra
            .iter()
            .map(|(idx, name)| (name.clone(), cell(*idx).to_owned()))
            .collect::<BTreeMap<_, _>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "recipe_name,cnn_category,ingredients,healthiness_score,Calories,Protein,TotalFat,Cholesterol,Sodium";

    fn read(body: &str) -> Result<(Vec<Recipe>, LoadReport), DataLoadError> {
        let csv = format!("{HEADER}\n{body}");
        read_csv(csv.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_parse_number_markers() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("N/A"), None);
        assert_eq!(parse_number("12g"), None);
    }

    #[test]
    fn test_rows_with_bad_category_or_score_are_skipped() {
        let (recipes, report) = read(
            "Lentil Soup,Soup,lentils,81,230,14,3,0,410\n\
             Mystery,,x,50,100,1,1,1,1\n\
             Pizza,Pizza,dough,60,700,20,30,40,900\n\
             Plain Rice,Rice,rice,,200,4,0,0,2\n",
        )
        .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(report.rows_read, 4);
        assert_eq!(report.rows_loaded, 1);
        assert_eq!(report.skipped_missing_category, 1);
        assert_eq!(report.skipped_unknown_category, 1);
        assert_eq!(report.skipped_invalid_score, 1);
        assert!(report.unknown_categories.contains("Pizza"));
    }

    #[test]
    fn test_missing_nutrients_become_none() {
        let (recipes, report) = read("Toast,Bread,bread,55,nan,,2,0,abc\n").unwrap();
        let toast = &recipes[0];
        assert_eq!(toast.nutrient(Nutrient::Calories), None);
        assert_eq!(toast.nutrient(Nutrient::Protein), None);
        assert_eq!(toast.nutrient(Nutrient::TotalFat), Some(2.0));
        assert_eq!(toast.nutrient(Nutrient::Sodium), None);
        assert_eq!(report.invalid_nutrient_cells, 1);
    }

    #[test]
    fn test_short_rows_are_padded_with_missing_cells() {
        let (recipes, report) = read(
            "Toast,Bread,bread,55\n\
             Plain Rice,Rice\n",
        )
        .unwrap();

        assert_eq!(report.rows_read, 2);
        assert_eq!(report.skipped_invalid_score, 1);
        assert_eq!(report.invalid_nutrient_cells, 0);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].recipe_name, "Toast");
        assert_eq!(recipes[0].nutrient(Nutrient::Calories), None);
        assert_eq!(recipes[0].nutrient(Nutrient::Sodium), None);
    }

    #[test]
    fn test_overlong_rows_are_malformed() {
        let result = read("Toast,Bread,bread,55,100,3,1,0,200,extra\n");
        match result {
            Err(DataLoadError::Csv { reason, .. }) => assert!(reason.contains("10 fields")),
            other => panic!("expected malformed row error, got {other:?}"),
        }
    }
}
