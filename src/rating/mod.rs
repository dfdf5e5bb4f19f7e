pub mod aggregation;
mod convergence;
pub mod expectation;
pub mod solver;
pub mod types;

pub use aggregation::sum_columns;
pub use expectation::{expected_scores, game_expectations};
pub use solver::{solve, solve_from, update_skills};
pub use types::{ScoreMap, SkillSolution, Skills};
