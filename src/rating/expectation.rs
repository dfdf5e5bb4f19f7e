use ndarray::Array1;

use super::types::{skills_from_map, to_score_map, ScoreMap, Skills};
use crate::domain::{Game, GameFormat, GameHistory, PlayerIndex};
use crate::errors::SchemaError;

/// Expected score of every player under a name-keyed skill assignment
pub fn expected_scores(history: &GameHistory, skills: &ScoreMap) -> Result<ScoreMap, SchemaError> {
    let skills = skills_from_map(history.roster(), skills)?;
    let totals = expected_totals(history, &skills);
    Ok(to_score_map(history.roster(), &totals))
}

/// Roster-aligned expected scores, summed over the whole history
pub fn expected_totals(history: &GameHistory, skills: &Skills) -> Array1<f64> {
    let mut totals = Array1::<f64>::zeros(skills.len());

    for game in history.games() {
        for (player, share) in game_expectations(game, skills) {
            totals[player] += share;
        }
    }

    totals
}

/// Each participant's chance of winning a single game.
///
/// Free-for-all games split one win by skill share. In a team game both
/// teammates receive their team's skill share, so the game hands out two
/// win units in total.
pub fn game_expectations(game: &Game, skills: &Skills) -> Vec<(PlayerIndex, f64)> {
    match &game.format {
        GameFormat::FreeForAll { players, .. } => {
            let total = group_skill(players, skills);
            players.iter().map(|&p| (p, skills[p] / total)).collect()
        }
        GameFormat::Teams { winners, losers } => {
            let winners_skill = group_skill(winners, skills);
            let losers_skill = group_skill(losers, skills);
            let total = winners_skill + losers_skill;

            let winners_share = winners.iter().map(|&p| (p, winners_skill / total));
            let losers_share = losers.iter().map(|&p| (p, losers_skill / total));
            winners_share.chain(losers_share).collect()
        }
    }
}

pub(crate) fn group_skill(players: &[PlayerIndex], skills: &Skills) -> f64 {
    players.iter().map(|&p| skills[p]).sum()
}
