use anyhow::Result;
use colored::Colorize;
use log::{info, warn};

use crate::config::settings::AppConfig;
use crate::report::{ReportWriter, SkillReport};
use crate::services::ingestion::IngestionService;

pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Starting Skill Estimation ===\n");

        let history = IngestionService::new(&self.config.input).load_history()?;
        info!("  → Loaded {} games\n", history.games().len());

        info!("Step 2: Solving skills and projecting matchups...");
        let report = SkillReport::compute(&history, &self.config.solver)?;
        info!(
            "  → {} players, {} matchups\n",
            report.players.len(),
            report.matchups.len()
        );

        info!("Step 3: Writing report...");
        let writer = ReportWriter::new(&self.config.input.report_path)?;
        if let Some(previous) = describe_previous(&writer) {
            info!("  → Replacing {}", previous);
        }
        writer.save(&report)?;

        println!("{}", render_ranking(&report));
        info!("=== Processing Complete ===");
        Ok(())
    }
}

/// Summary of the report about to be overwritten, if a readable one exists
fn describe_previous(writer: &ReportWriter) -> Option<String> {
    match writer.load() {
        Ok(previous) => previous.map(|report| {
            format!(
                "report from {} ({} players, {} games)",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.players.len(),
                report.games
            )
        }),
        Err(e) => {
            warn!("Ignoring unreadable previous report: {:#}", e);
            None
        }
    }
}

pub fn render_ranking(report: &SkillReport) -> String {
    let mut lines = vec![format!(
        "{} ({} games, {} iterations)",
        "Skill ranking".bold(),
        report.games,
        report.iterations
    )];

    for (rank, player) in report.ranked_players().iter().enumerate() {
        let name = if player.name == report.reference_player {
            player.name.cyan().bold()
        } else {
            player.name.normal()
        };

        lines.push(format!(
            "{:>3}. {:<20} {:>10.4}  {:>4} won / {:<4} played",
            rank + 1,
            name,
            player.skill,
            player.wins,
            player.games_played
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::report::PlayerSummary;

    fn player(name: &str, skill: f64) -> PlayerSummary {
        PlayerSummary {
            name: name.to_string(),
            games_played: 4,
            wins: 2,
            skill,
        }
    }

    #[test]
    fn test_ranking_lists_strongest_first() {
        let report = SkillReport {
            generated_at: Utc::now(),
            reference_player: "Alice".to_string(),
            iterations: 12,
            games: 8,
            players: vec![player("Alice", 1.0), player("Bob", 1.8), player("Carol", 0.4)],
            matchups: Vec::new(),
        };

        let rendered = render_ranking(&report);
        let bob = rendered.find("Bob").unwrap();
        let alice = rendered.find("Alice").unwrap();
        let carol = rendered.find("Carol").unwrap();

        assert!(bob < alice && alice < carol);
        assert!(rendered.contains("1.8000"));
    }

    #[test]
    fn test_describes_previous_report() {
        let temp_dir = std::env::temp_dir().join("group_skill_ranking_test_previous");
        let writer = ReportWriter::new(temp_dir.join("report.json")).unwrap();

        assert_eq!(describe_previous(&writer), None);

        let report = SkillReport {
            generated_at: Utc::now(),
            reference_player: "Alice".to_string(),
            iterations: 5,
            games: 7,
            players: vec![player("Alice", 1.0), player("Bob", 0.5)],
            matchups: Vec::new(),
        };
        writer.save(&report).unwrap();

        let summary = describe_previous(&writer).unwrap();
        assert!(summary.contains("2 players, 7 games"));

        // A corrupt report is skipped, not fatal
        std::fs::write(temp_dir.join("report.json"), "{not json").unwrap();
        assert_eq!(describe_previous(&writer), None);

        // Cleanup
        std::fs::remove_dir_all(&temp_dir).unwrap();
    }
}
