pub mod catalogue;
pub mod projection;

pub use catalogue::{enumerate_matchups, Matchup, MatchupKind, MatchupSide};
pub use projection::{project, MatchupStatistics, SideStatistics};
