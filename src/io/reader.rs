//! Tab-separated city file reader.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, TourError};
use crate::models::CityRecord;

const COLUMNS: usize = 4;

/// Reads a city file: one city per line, tab-separated
/// `region, name, latitude, longitude`, no header.
pub fn read_cities(path: impl AsRef<Path>) -> Result<Vec<CityRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let cities = parse_cities(&content)?;
    debug!("read {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// Parses city records from tab-separated text.
///
/// Blank lines are skipped and fields are trimmed. Errors carry the 1-based
/// line number.
///
/// # Examples
///
/// ```
/// use swap_tour::io::parse_cities;
///
/// let cities = parse_cities("Alabama\tMontgomery\t32.361538\t-86.279118\n").unwrap();
/// assert_eq!(cities.len(), 1);
/// assert_eq!(cities[0].name(), "Montgomery");
/// ```
pub fn parse_cities(input: &str) -> Result<Vec<CityRecord>> {
    let mut cities = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        cities.push(parse_line(idx + 1, line)?);
    }
    Ok(cities)
}

fn parse_line(line_no: usize, line: &str) -> Result<CityRecord> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != COLUMNS {
        return Err(TourError::parse(
            line_no,
            format!("expected {COLUMNS} tab-separated columns, found {}", fields.len()),
        ));
    }
    let x = parse_coord(line_no, "latitude", fields[2])?;
    let y = parse_coord(line_no, "longitude", fields[3])?;
    Ok(CityRecord::new(fields[0], fields[1], x, y))
}

fn parse_coord(line_no: usize, label: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|e| TourError::parse(line_no, format!("invalid {label} {raw:?}: {e}")))
}
