//! Input table loader
//!
//! Reads the flat (spot, maturity, price) point table a finite-difference
//! solver writes, one point per line, three numeric columns, no header.
//! Columns may be separated by runs of spaces, by tabs, or by commas; lines
//! whose first non-blank character is `#` and blank lines are skipped.

use crate::error::{Result, SurfaceError};
use std::fs;
use std::path::Path;

/// Read the three numeric columns of a surface table.
///
/// Returns `(spots, maturities, prices)` in file order. The file must exist
/// and every data row must carry exactly three numeric fields; violations
/// surface as [`SurfaceError::MissingInput`] and [`SurfaceError::ParseError`]
/// respectively.
pub fn load_surface_points<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SurfaceError::MissingInput(path.to_path_buf()));
    }

    let text =
        fs::read_to_string(path).map_err(|_| SurfaceError::MissingInput(path.to_path_buf()))?;

    // Left-trim every line so an indented `#` comment is still a comment to
    // the reader; line count is preserved for error positions.
    let text: String = text
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n");

    let delimiter = sniff_delimiter(&text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let mut spots = Vec::new();
    let mut maturities = Vec::new();
    let mut prices = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            SurfaceError::ParseError(format!("line {line}: {e}"))
        })?;
        // 1-based file line, counting skipped comment and blank lines.
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Runs of spaces produce empty fields; drop them.
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }

        if fields.len() != 3 {
            return Err(SurfaceError::ParseError(format!(
                "line {line}: expected 3 columns (spot, maturity, price), found {}",
                fields.len()
            )));
        }

        let mut values = [0.0f64; 3];
        for (col, token) in fields.iter().enumerate() {
            values[col] = token.parse::<f64>().map_err(|_| {
                SurfaceError::ParseError(format!("line {line}: '{token}' is not a number"))
            })?;
        }

        spots.push(values[0]);
        maturities.push(values[1]);
        prices.push(values[2]);
    }

    Ok((spots, maturities, prices))
}

/// Pick the column separator from the first data line.
fn sniff_delimiter(text: &str) -> u8 {
    text.lines()
        .map(str::trim_start)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line.contains(',') {
                b','
            } else if line.contains('\t') {
                b'\t'
            } else {
                b' '
            }
        })
        .unwrap_or(b' ')
}
