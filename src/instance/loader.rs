//! Instance loading from CSV tables.
//!
//! The expected layout has the header `Item,Peso,Valor` (item label,
//! weight, value). Exactly one row carries the [`CAPACITY_MARKER`] in its
//! `Item` field; that row's `Peso` is the knapsack capacity and its `Valor`
//! is ignored. Every other row is an item.
//!
//! ```text
//! Item,Peso,Valor
//! 1,2,3
//! 2,3,4
//! Capacidade,5,
//! ```
//!
//! Rows with an empty `Peso` are discarded before anything else is looked
//! at. Quantities may be integers or integral floats (`12.0`); fractional
//! parts are truncated.

use super::Instance;
use crate::error::{KnapsackError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Substring of the `Item` field identifying the capacity row.
pub const CAPACITY_MARKER: &str = "Capacidade";

#[derive(Debug, Deserialize)]
struct InstanceRow {
    #[serde(rename = "Item")]
    item: String,

    #[serde(rename = "Peso", default)]
    weight: Option<String>,

    #[serde(rename = "Valor", default)]
    value: Option<String>,
}

impl Instance {
    /// Loads an instance from a CSV file.
    ///
    /// Returns [`KnapsackError::InstanceNotFound`] when the file does not
    /// exist, so callers can tell a skippable instance apart from a
    /// malformed one.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => KnapsackError::InstanceNotFound(path.to_path_buf()),
            _ => KnapsackError::Io(err),
        })?;
        let instance = Self::from_csv_reader(file)?;
        debug!(
            path = %path.display(),
            items = instance.item_count(),
            capacity = instance.capacity(),
            "loaded instance"
        );
        Ok(instance)
    }

    /// Parses an instance from any CSV source.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut capacity: Option<u64> = None;
        let mut weights = Vec::new();
        let mut values = Vec::new();

        for row in rdr.deserialize() {
            let row: InstanceRow = row?;

            let Some(raw_weight) = non_empty(row.weight) else {
                continue;
            };
            let weight = parse_quantity(&raw_weight, "Peso")?;

            if row.item.contains(CAPACITY_MARKER) {
                if capacity.replace(weight).is_some() {
                    return Err(KnapsackError::config(format!(
                        "more than one '{CAPACITY_MARKER}' row"
                    )));
                }
                continue;
            }

            weights.push(weight);
            if let Some(raw_value) = non_empty(row.value) {
                values.push(parse_quantity(&raw_value, "Valor")?);
            }
        }

        let capacity = capacity.ok_or_else(|| {
            KnapsackError::config(format!("missing '{CAPACITY_MARKER}' row"))
        })?;

        Instance::new(weights, values, capacity)
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Parses a non-negative quantity, accepting integral floats like `12.0`.
///
/// Floats at or above 2^64 are rejected rather than clamped.
fn parse_quantity(raw: &str, column: &str) -> Result<u64> {
    if let Ok(v) = raw.parse::<u64>() {
        return Ok(v);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v < u64::MAX as f64 => Ok(v.trunc() as u64),
        _ => Err(KnapsackError::config(format!(
            "invalid {column} value: {raw:?}"
        ))),
    }
}
