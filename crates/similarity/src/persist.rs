//! Persisted form of a similarity matrix.
//!
//! A header-less, index-less, comma separated grid, one line per row. The
//! file carries no labels: row and column order is the sorted item-id list,
//! which the reader must supply again on load.

use crate::error::{Result, SimilarityError};
use crate::matrix::SimilarityMatrix;
use data_loader::MovieId;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `matrix` to `path`, creating parent directories.
///
/// Cells use the shortest representation that parses back to the same
/// `f64`, so a reload is bit-exact.
pub fn write_matrix(matrix: &SimilarityMatrix, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(fs::File::create(path)?);
    for i in 0..matrix.len() {
        let mut first = true;
        for value in matrix.row_values(i) {
            if !first {
                writer.write_all(b",")?;
            }
            write!(writer, "{}", value)?;
            first = false;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a matrix written by [`write_matrix`] and label it with `labels`.
///
/// Fails if the grid isn't exactly `labels.len()` × `labels.len()` or a
/// cell isn't numeric.
pub fn read_matrix(path: &Path, labels: &[MovieId]) -> Result<SimilarityMatrix> {
    let content = fs::read_to_string(path)?;
    parse_matrix(&content, labels)
}

fn parse_matrix(content: &str, labels: &[MovieId]) -> Result<SimilarityMatrix> {
    let expected = labels.len();
    let rows: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    if rows.len() != expected {
        return Err(SimilarityError::RowCountMismatch {
            expected,
            found: rows.len(),
        });
    }

    let mut values = Vec::with_capacity(expected * expected);
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<&str> = line.trim().split(',').collect();
        if cells.len() != expected {
            return Err(SimilarityError::ColumnCountMismatch {
                expected,
                found: cells.len(),
                row,
            });
        }

        for (column, cell) in cells.into_iter().enumerate() {
            let value: f64 = cell.trim().parse().map_err(|_| SimilarityError::InvalidCell {
                expected,
                row,
                column,
                value: cell.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(SimilarityMatrix::from_parts(labels.to_vec(), values))
}
