use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::settings::InputSettings;
use crate::domain::{GameHistory, OutcomeTable};
use crate::errors::{load_context, SchemaError};

/// Loads the participation and results tables from CSV files
pub struct IngestionService<'a> {
    settings: &'a InputSettings,
}

impl<'a> IngestionService<'a> {
    pub fn new(settings: &'a InputSettings) -> Self {
        Self { settings }
    }

    pub fn load_history(&self) -> Result<GameHistory> {
        info!("Step 1: Loading game tables...");

        let participation = load_table(&self.settings.participation_path)?;
        info!(
            "  → Participation: {} games, {} players",
            participation.row_count(),
            participation.columns().len()
        );

        let results = load_table(&self.settings.results_path)?;
        info!("  → Results: {} games", results.row_count());

        let history = GameHistory::new(participation, results)?;
        Ok(history)
    }
}

pub fn load_table(path: &Path) -> Result<OutcomeTable> {
    let path_str = path.display().to_string();
    let file = File::open(path).with_context(|| load_context(&path_str))?;
    parse_table(file).with_context(|| load_context(&path_str))
}

/// Parse a CSV table whose header row holds the player identifiers
pub fn parse_table<R: Read>(reader: R) -> Result<OutcomeTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", row))?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, value)| parse_cell(row, &columns, col, value))
            .collect::<Result<Vec<u8>, SchemaError>>()?;
        rows.push(cells);
    }

    let table = OutcomeTable::from_rows(columns, &rows)?;
    Ok(table)
}

fn parse_cell(row: usize, columns: &[String], col: usize, value: &str) -> Result<u8, SchemaError> {
    match value.parse::<f64>() {
        Ok(v) if v == 0.0 => Ok(0),
        Ok(v) if v == 1.0 => Ok(1),
        _ => Err(SchemaError::NonBinaryCell {
            row,
            column: columns.get(col).cloned().unwrap_or_default(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parses_header_and_cells() {
        let csv = "Alice,Bob,Carol\n1,1,0\n1.0, 0.0 ,1\n";

        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.columns(), ["Alice", "Bob", "Carol"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 0), 1);
        assert_eq!(table.cell(1, 1), 0);
        assert_eq!(table.cell(1, 2), 1);
    }

    #[test]
    fn test_rejects_non_indicator_values() {
        let csv = "Alice,Bob\n1,yes\n";

        let err = parse_table(csv.as_bytes()).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().unwrap();

        assert_eq!(
            schema,
            &SchemaError::NonBinaryCell {
                row: 0,
                column: "Bob".to_string(),
                value: "yes".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let csv = "Alice,Bob\n1,0,1\n";

        assert!(parse_table(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_history_from_files() {
        let temp_dir = std::env::temp_dir().join("group_skill_ranking_test_ingestion");
        fs::create_dir_all(&temp_dir).unwrap();

        let settings = InputSettings {
            participation_path: temp_dir.join("participation.csv"),
            results_path: temp_dir.join("results.csv"),
            report_path: temp_dir.join("report.json"),
        };
        fs::write(&settings.participation_path, "Alice,Bob\n1,1\n1,1\n").unwrap();
        fs::write(&settings.results_path, "Bob,Alice\n0,1\n1,0\n").unwrap();

        let history = IngestionService::new(&settings).load_history().unwrap();

        assert_eq!(history.roster().names(), ["Alice", "Bob"]);
        assert_eq!(history.games().len(), 2);
        assert_eq!(history.games()[0].winning_side(), vec![0]);

        // Cleanup
        fs::remove_dir_all(&temp_dir).unwrap();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_table(Path::new("does/not/exist.csv")).unwrap_err();

        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
