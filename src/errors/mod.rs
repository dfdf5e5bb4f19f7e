use thiserror::Error;

/// Failures of the skill estimation batch. None of them are recovered locally:
/// a partially computed skill assignment has no meaning.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankingError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("data integrity error: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
    #[error("divergence error: {0}")]
    Divergence(#[from] DivergenceError),
}

/// Malformed or misaligned input tables
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("table has no player columns")]
    NoColumns,
    #[error("duplicate player column '{0}'")]
    DuplicateColumn(String),
    #[error("missing player column '{0}'")]
    MissingColumn(String),
    #[error("unexpected player column '{0}'")]
    UnexpectedColumn(String),
    #[error("row count mismatch: participation has {participation} rows, results has {results}")]
    RowCountMismatch { participation: usize, results: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column '{column}': value '{value}' is not 0 or 1")]
    NonBinaryCell {
        row: usize,
        column: String,
        value: String,
    },
}

/// A game whose encoded results break the 2/3/4-player or team pairing rules
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataIntegrityError {
    #[error("game {game}: {participants} participants, expected 2, 3 or 4")]
    ParticipantCount { game: usize, participants: usize },
    #[error("game {game}: player '{player}' has a result but did not take part")]
    ResultWithoutParticipation { game: usize, player: String },
    #[error("game {game}: {winners} winners recorded, expected exactly one")]
    WinnerCount { game: usize, winners: usize },
    #[error("game {game}: player '{player}' has no teammate sharing their result")]
    UnpairedTeam { game: usize, player: String },
    #[error("game {game}: team game needs two winners and two losers, found {winners} winners")]
    TeamSplit { game: usize, winners: usize },
}

/// The solver could not produce a converged skill assignment
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DivergenceError {
    #[error("iteration {iteration}: expected score of '{player}' is zero or undefined")]
    ZeroExpectedScore { player: String, iteration: usize },
    #[error("iteration {iteration}: skill of '{player}' is not finite")]
    NonFiniteSkill { player: String, iteration: usize },
    #[error("no convergence after {iterations} iterations")]
    IterationLimit { iterations: usize },
}

/// Add context to input file errors
pub fn load_context(path: &str) -> String {
    format!("Failed to load table from: {}", path)
}

/// Add context to report output errors
pub fn report_context(operation: &str, path: &str) -> String {
    format!("Failed to {} report at: {}", operation, path)
}
