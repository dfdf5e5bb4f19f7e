use ndarray::Array1;

use super::types::ScoreMap;
use crate::domain::{OutcomeTable, PlayerName};
use crate::errors::SchemaError;

/// Per-player column totals of an indicator table. Given the results table
/// this is total wins; given the participation table, games played.
pub fn sum_columns(table: &OutcomeTable, players: &[PlayerName]) -> Result<ScoreMap, SchemaError> {
    players
        .iter()
        .map(|name| column_total(table, name).map(|total| (name.clone(), total)))
        .collect()
}

/// Column totals in the order of `players`
pub fn totals_vector(
    table: &OutcomeTable,
    players: &[PlayerName],
) -> Result<Array1<f64>, SchemaError> {
    players
        .iter()
        .map(|name| column_total(table, name))
        .collect::<Result<Vec<_>, _>>()
        .map(Array1::from)
}

fn column_total(table: &OutcomeTable, name: &str) -> Result<f64, SchemaError> {
    let column = table.column(name)?;
    Ok(column.iter().map(|&v| f64::from(v)).sum())
}
