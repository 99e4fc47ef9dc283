//! Drink log reading.
//!
//! The engine never persists anything; this module is the read-only side of
//! the calling application, parsing drink events from a JSON Lines or CSV
//! log so they can be fed to the engine. Format is chosen by file
//! extension: `.csv` reads as CSV, anything else as JSONL.

use crate::types::{BeverageType, DrinkEvent};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

/// Load drink events from a log file
pub fn load_drinks(path: &Path) -> Result<Vec<DrinkEvent>> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let drinks = if is_csv {
        load_drinks_csv(path)?
    } else {
        load_drinks_jsonl(path)?
    };

    tracing::info!("Loaded {} drink events from {:?}", drinks.len(), path);
    Ok(drinks)
}

/// Load drink events from a JSON Lines file, one event per line
fn load_drinks_jsonl(path: &Path) -> Result<Vec<DrinkEvent>> {
    let contents = std::fs::read_to_string(path)?;

    let mut drinks = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: DrinkEvent = serde_json::from_str(line).map_err(|e| {
            Error::Record(format!("{:?} line {}: {}", path, line_no + 1, e))
        })?;
        drinks.push(event);
    }

    Ok(drinks)
}

/// CSV row format for reading drink logs
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    volume_ml: Option<f64>,
    #[serde(rename = "type")]
    beverage_type: Option<String>,
    occurred_at: String,
}

impl TryFrom<CsvRow> for DrinkEvent {
    type Error = crate::Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| Error::Record(format!("Invalid UUID: {}", e)))?;

        let occurred_at = DateTime::parse_from_rfc3339(&row.occurred_at)
            .map_err(|e| Error::Record(format!("Invalid date: {}", e)))?
            .with_timezone(&Utc);

        let beverage_type = row
            .beverage_type
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_beverage_tag);

        Ok(DrinkEvent {
            id,
            volume_ml: row.volume_ml,
            beverage_type,
            occurred_at,
        })
    }
}

/// Map a free-form beverage tag to its closed enum variant
///
/// Unrecognized tags resolve to `Other`, matching the catalog fallback.
fn parse_beverage_tag(tag: &str) -> BeverageType {
    match tag.to_lowercase().as_str() {
        "beer" => BeverageType::Beer,
        "wine" => BeverageType::Wine,
        "sake" => BeverageType::Sake,
        "shochu" => BeverageType::Shochu,
        "whiskey" => BeverageType::Whiskey,
        "cocktail" => BeverageType::Cocktail,
        _ => BeverageType::Other,
    }
}

/// Load drink events from a CSV file with header `id,volume_ml,type,occurred_at`
fn load_drinks_csv(path: &Path) -> Result<Vec<DrinkEvent>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut drinks = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        drinks.push(DrinkEvent::try_from(row)?);
    }

    Ok(drinks)
}
