use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::SolverSettings;
use crate::domain::GameHistory;
use crate::errors::RankingError;
use crate::matchups::{enumerate_matchups, project, MatchupStatistics};
use crate::rating::aggregation::totals_vector;
use crate::rating::solve;

/// Per-player totals and converged skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub skill: f64,
}

/// Aggregate result of one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillReport {
    pub generated_at: DateTime<Utc>,
    pub reference_player: String,
    pub iterations: usize,
    pub games: usize,
    pub players: Vec<PlayerSummary>,
    pub matchups: Vec<MatchupStatistics>,
}

impl SkillReport {
    /// Solve skills and project every matchup. Either the whole report is
    /// produced or the first failure is returned.
    pub fn compute(history: &GameHistory, settings: &SolverSettings) -> Result<Self, RankingError> {
        let roster = history.roster();
        let solution = solve(history, settings)?;
        let games_played = totals_vector(history.participation(), roster.names())?;
        let wins = totals_vector(history.results(), roster.names())?;

        let players = roster
            .names()
            .iter()
            .enumerate()
            .map(|(idx, name)| PlayerSummary {
                name: name.clone(),
                games_played: games_played[idx] as u32,
                wins: wins[idx] as u32,
                skill: solution.skills[idx],
            })
            .collect();

        let catalogue = enumerate_matchups(roster);
        let matchups = project(&catalogue, history, &solution.skills);

        Ok(Self {
            generated_at: Utc::now(),
            reference_player: roster.reference_player().to_string(),
            iterations: solution.iterations,
            games: history.games().len(),
            players,
            matchups,
        })
    }

    /// Players ordered from strongest to weakest
    pub fn ranked_players(&self) -> Vec<&PlayerSummary> {
        let mut ranked: Vec<&PlayerSummary> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.skill.total_cmp(&a.skill).then_with(|| a.name.cmp(&b.name)));
        ranked
    }
}
