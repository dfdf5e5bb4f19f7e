use anyhow::Result;
use colored::Colorize;
use log::info;
use ndarray::Array1;

use crate::config::settings::AppConfig;
use crate::domain::GameHistory;
use crate::rating::solver::actual_totals;
use crate::rating::types::to_score_map;
use crate::rating::{expected_scores, sum_columns, update_skills, ScoreMap};
use crate::services::ingestion::IngestionService;

/// Expected scores, actual scores and one solver step, starting from the
/// configured initial skills
pub struct Inspection {
    pub expected: ScoreMap,
    pub actual: ScoreMap,
    pub updated: ScoreMap,
}

pub struct InspectionService {
    config: AppConfig,
}

impl InspectionService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Starting Inspection ===\n");

        let history = IngestionService::new(&self.config.input).load_history()?;
        let inspection = inspect(&history, self.config.solver.initial_skill)?;

        println!("{}", render_scores("Expected scores", &inspection.expected));
        println!("{}", render_scores("Actual scores", &inspection.actual));
        println!("{}", render_scores("Skills after one update", &inspection.updated));

        info!("=== Inspection Complete ===");
        Ok(())
    }
}

pub fn inspect(history: &GameHistory, initial_skill: f64) -> Result<Inspection> {
    let roster = history.roster();
    let skills = Array1::from_elem(roster.len(), initial_skill);

    let expected = expected_scores(history, &to_score_map(roster, &skills))?;
    let actual = sum_columns(history.results(), roster.names())?;
    let updated = update_skills(history, &skills, &actual_totals(history)?, 1)?;

    Ok(Inspection {
        expected,
        actual,
        updated: to_score_map(roster, &updated),
    })
}

fn render_scores(title: &str, scores: &ScoreMap) -> String {
    let mut lines = vec![title.bold().to_string()];
    lines.extend(
        scores
            .iter()
            .map(|(name, value)| format!("  {:<20} {:>10.4}", name, value)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutcomeTable;

    fn history() -> GameHistory {
        let names: Vec<String> = ["Alice", "Bob", "Carol", "Dave"]
            .iter()
            .map(|n| n.to_string())
            .collect();
        GameHistory::new(
            OutcomeTable::from_rows(names.clone(), &[vec![1, 1, 1, 1], vec![1, 1, 0, 0]])
                .unwrap(),
            OutcomeTable::from_rows(names, &[vec![1, 0, 1, 0], vec![0, 1, 0, 0]]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_step_view() {
        let inspection = inspect(&history(), 1.0).unwrap();

        assert!((inspection.expected["Alice"] - 1.0).abs() < 1e-12);
        assert!((inspection.expected["Carol"] - 0.5).abs() < 1e-12);
        assert_eq!(inspection.actual["Alice"], 1.0);
        assert_eq!(inspection.actual["Bob"], 1.0);

        assert_eq!(inspection.updated["Alice"], 1.0);
        assert!((inspection.updated["Bob"] - 1.0).abs() < 1e-12);
        assert!((inspection.updated["Carol"] - 2.0).abs() < 1e-12);
        assert_eq!(inspection.updated["Dave"], 0.0);
    }

    #[test]
    fn test_render_scores_lists_every_player() {
        let inspection = inspect(&history(), 1.0).unwrap();

        let rendered = render_scores("Actual scores", &inspection.actual);

        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("Dave"));
    }
}
