use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::catalogue::{Matchup, MatchupKind};
use crate::domain::{GameHistory, PlayerIndex, PlayerName, SideKey};
use crate::rating::expectation::group_skill;
use crate::rating::Skills;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideStatistics {
    pub name: String,
    pub players: Vec<PlayerName>,
    /// `None` when the matchup never occurred
    pub played: Option<u32>,
    pub won: Option<u32>,
    pub predicted_win_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupStatistics {
    pub id: usize,
    pub kind: MatchupKind,
    pub sides: Vec<SideStatistics>,
}

impl MatchupStatistics {
    pub fn was_observed(&self) -> bool {
        self.sides.iter().any(|s| s.played.is_some())
    }
}

#[derive(Debug, Default)]
struct Tally {
    played: u32,
    wins: HashMap<Vec<PlayerIndex>, u32>,
}

/// Historical counts and predicted win probabilities for every catalogued
/// matchup. A game counts towards a matchup only when its sides are exactly
/// the matchup's sides.
pub fn project(
    catalogue: &[Matchup],
    history: &GameHistory,
    skills: &Skills,
) -> Vec<MatchupStatistics> {
    let tallies = tally_games(history);
    debug!(
        "Projecting {} matchups from {} distinct game groupings",
        catalogue.len(),
        tallies.len()
    );

    catalogue
        .iter()
        .map(|matchup| project_matchup(matchup, tallies.get(&matchup.side_key()), history, skills))
        .collect()
}

fn tally_games(history: &GameHistory) -> HashMap<SideKey, Tally> {
    let mut tallies: HashMap<SideKey, Tally> = HashMap::new();

    for game in history.games() {
        let tally = tallies.entry(game.side_key()).or_default();
        tally.played += 1;
        *tally.wins.entry(game.winning_side()).or_insert(0) += 1;
    }

    tallies
}

fn project_matchup(
    matchup: &Matchup,
    tally: Option<&Tally>,
    history: &GameHistory,
    skills: &Skills,
) -> MatchupStatistics {
    let total_skill = group_skill(&matchup.players(), skills);
    let side_count = matchup.sides.len() as f64;
    let roster = history.roster();

    let sides = matchup
        .sides
        .iter()
        .map(|side| SideStatistics {
            name: side.name.clone(),
            players: roster.sorted_names(&side.players),
            played: tally.map(|t| t.played),
            won: tally.map(|t| t.wins.get(&side.players).copied().unwrap_or(0)),
            predicted_win_probability: win_share(
                group_skill(&side.players, skills),
                total_skill,
                side_count,
            ),
        })
        .collect();

    MatchupStatistics {
        id: matchup.id,
        kind: matchup.kind,
        sides,
    }
}

/// Skill share of one side. Players can converge at skill 0 when they only
/// ever lost team games, so a matchup with no skill at all splits evenly.
fn win_share(side_skill: f64, total_skill: f64, side_count: f64) -> f64 {
    if total_skill > 0.0 {
        side_skill / total_skill
    } else {
        1.0 / side_count
    }
}
