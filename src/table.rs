//! Tabular data model and CSV parsing.
//!
//! A [`Table`] is one parsed source file: an ordered header plus rows of
//! string cells. Tables are read once per merge invocation and discarded
//! afterwards; no type inference or coercion is performed.

use crate::utils::encoding::{decode_utf8, DecodeError};
use std::path::Path;
use thiserror::Error;

/// Why a single input file was dropped from the merge.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encoding(#[from] DecodeError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("no columns to parse from file")]
    NoColumns,
}

/// One parsed CSV file: header tuple plus rows, both in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read and parse a CSV file. The first row is the header; every data
    /// row must have the same number of fields as the header (a ragged row
    /// makes the whole file a read error).
    pub fn read(path: &Path) -> Result<Self, ReadError> {
        let bytes = std::fs::read(path)?;
        let text = decode_utf8(&bytes)?;

        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(text.as_bytes());
        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if header.is_empty() || (header.len() == 1 && header[0].is_empty()) {
            return Err(ReadError::NoColumns);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Table { header, rows })
    }

    /// Produce a table with exactly the `columns` schema: values are kept
    /// where this table has the named column, blanks fill the rest. When a
    /// column name appears more than once in the source header, the first
    /// occurrence wins.
    pub fn reindex(&self, columns: &[String]) -> Table {
        let positions: Vec<Option<usize>> =
            columns.iter().map(|name| self.header.iter().position(|h| h == name)).collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                positions
                    .iter()
                    .map(|pos| pos.and_then(|i| row.get(i)).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Table { header: columns.to_vec(), rows }
    }
}
