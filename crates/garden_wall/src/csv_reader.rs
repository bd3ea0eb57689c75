use crate::constants::{
    EXPECTED_LENGTH_HEADER, EXPECTED_PRICE_HEADER, EXPECTED_X_HEADER, EXPECTED_Y_HEADER,
};
use crate::cover::{Segment, SegmentCatalog};
use crate::error::{Result, WallError};
use crate::geometry::Point;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Reads plant positions from a CSV file with an `X,Y` header
///
/// # Errors
/// Returns error if the file cannot be read or a row is malformed
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = std::fs::File::open(path)?;
    read_points_from_reader(file)
}

/// Reads the segment catalog from a CSV file with a `Length,Price` header
///
/// # Errors
/// Returns error if the file cannot be read, a row is malformed or a
/// segment has zero length
pub fn read_catalog_csv<P: AsRef<Path>>(path: P) -> Result<SegmentCatalog> {
    let file = std::fs::File::open(path)?;
    read_catalog_from_reader(file)
}

pub fn read_points_from_reader<R: Read>(reader: R) -> Result<Vec<Point>> {
    let rows = read_pairs::<R, i32>(reader, (EXPECTED_X_HEADER, EXPECTED_Y_HEADER))?;
    Ok(rows
        .into_iter()
        .map(|(_, x, y)| Point::new(x, y))
        .collect())
}

pub fn read_catalog_from_reader<R: Read>(reader: R) -> Result<SegmentCatalog> {
    let rows = read_pairs::<R, u32>(reader, (EXPECTED_LENGTH_HEADER, EXPECTED_PRICE_HEADER))?;
    rows.into_iter()
        .map(|(row, length, price)| {
            if length == 0 {
                Err(WallError::InvalidSegment { line: row })
            } else {
                Ok(Segment::new(length, price))
            }
        })
        .collect()
}

/// Reads two integer columns, returning `(row, first, second)` per record
fn read_pairs<R: Read, T: FromStr<Err = std::num::ParseIntError>>(
    reader: R,
    headers: (&str, &str),
) -> Result<Vec<(usize, T, T)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true) // allow additional columns
        .from_reader(reader);

    validate_csv_headers(&mut rdr, headers)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // CSV rows are 1-indexed, +1 for header

        if rec.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let first = parse_value(get_column_value(&rec, 0, row)?, row)?;
        let second = parse_value(get_column_value(&rec, 1, row)?, row)?;
        rows.push((row, first, second));
    }

    Ok(rows)
}

/// Validates CSV headers match expected format
fn validate_csv_headers<R: Read>(
    csv_reader: &mut csv::Reader<R>,
    (first, second): (&str, &str),
) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| WallError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    for (index, expected) in [first, second].into_iter().enumerate() {
        let found = headers.get(index).ok_or_else(|| {
            WallError::CsvHeader(format!("Missing '{}' column at index {}", expected, index))
        })?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(WallError::CsvHeader(format!(
                "Expected '{}' in column {}, found '{}'",
                expected, index, found
            )));
        }
    }

    Ok(())
}

/// Safely extracts a column value from a CSV record
fn get_column_value(record: &StringRecord, column_index: usize, row_number: usize) -> Result<&str> {
    record
        .get(column_index)
        .map(str::trim)
        .ok_or_else(|| WallError::CsvRow {
            row: row_number,
            got: record.len(),
        })
}

fn parse_value<T: FromStr<Err = std::num::ParseIntError>>(value: &str, row: usize) -> Result<T> {
    value.parse().map_err(|source| WallError::Parse {
        line: row,
        value: value.to_string(),
        source,
    })
}
