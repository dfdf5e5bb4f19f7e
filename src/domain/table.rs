use std::collections::HashSet;

use ndarray::{Array2, ArrayView1, Axis};

use super::roster::PlayerName;
use crate::errors::SchemaError;

/// Indicator table: one row per game, one column per player, cells 0 or 1.
/// Used both for participation and for results.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeTable {
    columns: Vec<PlayerName>,
    cells: Array2<u8>,
}

impl OutcomeTable {
    pub fn new(columns: Vec<PlayerName>, cells: Array2<u8>) -> Result<Self, SchemaError> {
        validate_columns(&columns)?;

        if cells.ncols() != columns.len() {
            return Err(SchemaError::RowWidth {
                row: 0,
                expected: columns.len(),
                found: cells.ncols(),
            });
        }

        validate_cells(&columns, &cells)?;
        Ok(Self { columns, cells })
    }

    /// Build a table from row vectors, checking every row has one cell per column
    pub fn from_rows(columns: Vec<PlayerName>, rows: &[Vec<u8>]) -> Result<Self, SchemaError> {
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(SchemaError::RowWidth {
                    row,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
        }

        let cells = Array2::from_shape_fn((rows.len(), columns.len()), |(r, c)| rows[r][c]);
        Self::new(columns, cells)
    }

    pub fn columns(&self) -> &[PlayerName] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cell(&self, row: usize, column: usize) -> u8 {
        self.cells[[row, column]]
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, u8>, SchemaError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))?;
        Ok(self.cells.column(idx))
    }

    /// Reorder columns to `order`. The column sets must be identical.
    pub fn realign(&self, order: &[PlayerName]) -> Result<Self, SchemaError> {
        if let Some(extra) = self.columns.iter().find(|c| !order.contains(c)) {
            return Err(SchemaError::UnexpectedColumn(extra.clone()));
        }

        let indices = order
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| SchemaError::MissingColumn(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            columns: order.to_vec(),
            cells: self.cells.select(Axis(1), &indices),
        })
    }
}

fn validate_columns(columns: &[PlayerName]) -> Result<(), SchemaError> {
    if columns.is_empty() {
        return Err(SchemaError::NoColumns);
    }

    let mut seen = HashSet::new();
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(SchemaError::DuplicateColumn(name.clone()));
        }
    }

    Ok(())
}

fn validate_cells(columns: &[PlayerName], cells: &Array2<u8>) -> Result<(), SchemaError> {
    for ((row, col), &value) in cells.indexed_iter() {
        if value > 1 {
            return Err(SchemaError::NonBinaryCell {
                row,
                column: columns[col].clone(),
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
