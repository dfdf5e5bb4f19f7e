use log::{debug, info};
use ndarray::Array1;

use super::aggregation::totals_vector;
use super::convergence::{has_converged, max_change, should_continue};
use super::expectation::expected_totals;
use super::types::{SkillSolution, Skills};
use crate::config::settings::SolverSettings;
use crate::domain::GameHistory;
use crate::errors::{DivergenceError, RankingError};

const REFERENCE_SKILL: f64 = 1.0;

/// Estimates skills by multiplicative fixed-point iteration, starting every
/// player at `settings.initial_skill`.
pub fn solve(
    history: &GameHistory,
    settings: &SolverSettings,
) -> Result<SkillSolution, RankingError> {
    let initial = Array1::from_elem(history.roster().len(), settings.initial_skill);
    solve_from(history, initial, settings)
}

pub fn solve_from(
    history: &GameHistory,
    initial: Skills,
    settings: &SolverSettings,
) -> Result<SkillSolution, RankingError> {
    info!(
        "Estimating skills for {} players over {} games",
        history.roster().len(),
        history.games().len()
    );

    let actual = actual_totals(history)?;
    let solution = iterate_until_convergence(history, initial, &actual, settings)?;

    info!("Skill solver converged in {} iterations", solution.iterations);
    Ok(solution)
}

/// Total wins per player, in roster order
pub fn actual_totals(history: &GameHistory) -> Result<Skills, RankingError> {
    let totals = totals_vector(history.results(), history.roster().names())?;
    Ok(totals)
}

fn iterate_until_convergence(
    history: &GameHistory,
    initial: Skills,
    actual: &Skills,
    settings: &SolverSettings,
) -> Result<SkillSolution, DivergenceError> {
    let mut skills = initial;
    let mut iteration = 0;

    while should_continue(iteration, settings.max_iterations) {
        iteration += 1;
        let new_skills = update_skills(history, &skills, actual, iteration)?;
        debug!(
            "Iteration {}: max skill change {:.6}",
            iteration,
            max_change(&skills, &new_skills)
        );

        if has_converged(&skills, &new_skills, settings.convergence_tolerance) {
            return Ok(SkillSolution {
                skills: new_skills,
                iterations: iteration,
            });
        }

        skills = new_skills;
    }

    Err(DivergenceError::IterationLimit {
        iterations: settings.max_iterations,
    })
}

/// One fixed-point step: every skill is scaled by actual / expected score,
/// then the reference player is pinned back to 1.0.
pub fn update_skills(
    history: &GameHistory,
    skills: &Skills,
    actual: &Skills,
    iteration: usize,
) -> Result<Skills, DivergenceError> {
    let roster = history.roster();
    let expected = expected_totals(history, skills);
    let mut new_skills = Array1::<f64>::zeros(skills.len());

    for player in 0..skills.len() {
        let expected_score = expected[player];
        if !(expected_score > 0.0 && expected_score.is_finite()) {
            return Err(DivergenceError::ZeroExpectedScore {
                player: roster.name(player).to_string(),
                iteration,
            });
        }

        let new_skill = skills[player] * actual[player] / expected_score;
        if !new_skill.is_finite() {
            return Err(DivergenceError::NonFiniteSkill {
                player: roster.name(player).to_string(),
                iteration,
            });
        }

        new_skills[player] = new_skill;
    }

    new_skills[roster.reference_index()] = REFERENCE_SKILL;
    Ok(new_skills)
}
