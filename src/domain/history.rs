use log::debug;

use super::roster::{PlayerIndex, Roster};
use super::table::OutcomeTable;
use crate::errors::{DataIntegrityError, RankingError, SchemaError};

/// Canonical grouping of a game's participants: each side is a sorted list of
/// roster indices and the sides themselves are sorted.
pub type SideKey = Vec<Vec<PlayerIndex>>;

#[derive(Debug, Clone, PartialEq)]
pub enum GameFormat {
    /// Two or three players, one winner
    FreeForAll {
        players: Vec<PlayerIndex>,
        winner: PlayerIndex,
    },
    /// Four players as two fixed teams of two
    Teams {
        winners: [PlayerIndex; 2],
        losers: [PlayerIndex; 2],
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub index: usize,
    pub format: GameFormat,
}

impl Game {
    pub fn side_key(&self) -> SideKey {
        let mut sides = match &self.format {
            GameFormat::FreeForAll { players, .. } => players.iter().map(|&p| vec![p]).collect(),
            GameFormat::Teams { winners, losers } => vec![sorted(winners), sorted(losers)],
        };
        sides.sort();
        sides
    }

    pub fn winning_side(&self) -> Vec<PlayerIndex> {
        match &self.format {
            GameFormat::FreeForAll { winner, .. } => vec![*winner],
            GameFormat::Teams { winners, .. } => sorted(winners),
        }
    }
}

fn sorted(pair: &[PlayerIndex; 2]) -> Vec<PlayerIndex> {
    let mut side = pair.to_vec();
    side.sort_unstable();
    side
}

/// Validated, immutable batch of historical games for a fixed roster
#[derive(Debug, Clone)]
pub struct GameHistory {
    roster: Roster,
    participation: OutcomeTable,
    results: OutcomeTable,
    games: Vec<Game>,
}

impl GameHistory {
    /// Align the two tables and parse every row into a typed game.
    /// The participation column order defines the roster order.
    pub fn new(participation: OutcomeTable, results: OutcomeTable) -> Result<Self, RankingError> {
        if participation.row_count() != results.row_count() {
            return Err(SchemaError::RowCountMismatch {
                participation: participation.row_count(),
                results: results.row_count(),
            }
            .into());
        }

        let roster =
            Roster::new(participation.columns().to_vec()).ok_or(SchemaError::NoColumns)?;
        let results = results.realign(roster.names())?;
        let games = parse_games(&roster, &participation, &results)?;

        debug!("Parsed {} games for {} players", games.len(), roster.len());

        Ok(Self {
            roster,
            participation,
            results,
            games,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn participation(&self) -> &OutcomeTable {
        &self.participation
    }

    pub fn results(&self) -> &OutcomeTable {
        &self.results
    }
}

fn parse_games(
    roster: &Roster,
    participation: &OutcomeTable,
    results: &OutcomeTable,
) -> Result<Vec<Game>, DataIntegrityError> {
    (0..participation.row_count())
        .map(|row| parse_game(row, roster, participation, results))
        .collect()
}

fn parse_game(
    row: usize,
    roster: &Roster,
    participation: &OutcomeTable,
    results: &OutcomeTable,
) -> Result<Game, DataIntegrityError> {
    let mut winners = Vec::new();
    let mut losers = Vec::new();

    for player in 0..roster.len() {
        let played = participation.cell(row, player) == 1;
        let won = results.cell(row, player) == 1;

        match (played, won) {
            (true, true) => winners.push(player),
            (true, false) => losers.push(player),
            (false, true) => {
                return Err(DataIntegrityError::ResultWithoutParticipation {
                    game: row,
                    player: roster.name(player).to_string(),
                });
            }
            (false, false) => {}
        }
    }

    let format = match winners.len() + losers.len() {
        2 | 3 => free_for_all(row, winners, losers)?,
        4 => teams(row, roster, winners, losers)?,
        participants => {
            return Err(DataIntegrityError::ParticipantCount {
                game: row,
                participants,
            });
        }
    };

    Ok(Game { index: row, format })
}

fn free_for_all(
    row: usize,
    winners: Vec<PlayerIndex>,
    losers: Vec<PlayerIndex>,
) -> Result<GameFormat, DataIntegrityError> {
    let [winner] = winners[..] else {
        return Err(DataIntegrityError::WinnerCount {
            game: row,
            winners: winners.len(),
        });
    };

    let mut players = losers;
    players.push(winner);
    players.sort_unstable();

    Ok(GameFormat::FreeForAll { players, winner })
}

fn teams(
    row: usize,
    roster: &Roster,
    winners: Vec<PlayerIndex>,
    losers: Vec<PlayerIndex>,
) -> Result<GameFormat, DataIntegrityError> {
    match (&winners[..], &losers[..]) {
        (&[w1, w2], &[l1, l2]) => Ok(GameFormat::Teams {
            winners: [w1, w2],
            losers: [l1, l2],
        }),
        (&[lone], _) | (_, &[lone]) => Err(DataIntegrityError::UnpairedTeam {
            game: row,
            player: roster.name(lone).to_string(),
        }),
        _ => Err(DataIntegrityError::TeamSplit {
            game: row,
            winners: winners.len(),
        }),
    }
}
