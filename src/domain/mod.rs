pub mod history;
mod roster;
pub mod table;

pub use history::{Game, GameFormat, GameHistory, SideKey};
pub use roster::{PlayerIndex, PlayerName, Roster};
pub use table::OutcomeTable;
