use serde::{Deserialize, Serialize};

use crate::domain::{PlayerIndex, Roster, SideKey};

const SIDE_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupKind {
    HeadToHead,
    ThreeWay,
    Team,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupSide {
    /// Roster indices, ascending
    pub players: Vec<PlayerIndex>,
    /// Sorted player names joined by ","
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub id: usize,
    pub kind: MatchupKind,
    pub sides: Vec<MatchupSide>,
}

impl Matchup {
    pub fn side_key(&self) -> SideKey {
        let mut key: SideKey = self.sides.iter().map(|s| s.players.clone()).collect();
        key.sort();
        key
    }

    pub fn players(&self) -> Vec<PlayerIndex> {
        let mut players: Vec<PlayerIndex> =
            self.sides.iter().flat_map(|s| s.players.iter().copied()).collect();
        players.sort_unstable();
        players
    }
}

/// Every head-to-head pair, every three-way group and every 2v2 split of the
/// roster, numbered in that order.
pub fn enumerate_matchups(roster: &Roster) -> Vec<Matchup> {
    let n = roster.len();

    let head_to_head = combinations(n, 2)
        .into_iter()
        .map(|pair| (MatchupKind::HeadToHead, singles(&pair)));
    let three_way = combinations(n, 3)
        .into_iter()
        .map(|group| (MatchupKind::ThreeWay, singles(&group)));
    let team = combinations(n, 4)
        .into_iter()
        .flat_map(|group| team_splits(&group))
        .map(|split| (MatchupKind::Team, split));

    head_to_head
        .chain(three_way)
        .chain(team)
        .enumerate()
        .map(|(id, (kind, sides))| build_matchup(roster, id, kind, sides))
        .collect()
}

fn singles(group: &[PlayerIndex]) -> Vec<Vec<PlayerIndex>> {
    group.iter().map(|&p| vec![p]).collect()
}

/// The three ways to split four players into two pairs
fn team_splits(group: &[PlayerIndex]) -> Vec<Vec<Vec<PlayerIndex>>> {
    let first = group[0];
    let rest = &group[1..];

    rest.iter()
        .map(|&partner| {
            let opponents = rest.iter().copied().filter(|&p| p != partner).collect();
            vec![vec![first, partner], opponents]
        })
        .collect()
}

/// All k-element index combinations of 0..n in lexicographic order
fn combinations(n: usize, k: usize) -> Vec<Vec<PlayerIndex>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    extend_combinations(0, n, k, &mut current, &mut result);
    result
}

fn extend_combinations(
    start: usize,
    n: usize,
    k: usize,
    current: &mut Vec<PlayerIndex>,
    result: &mut Vec<Vec<PlayerIndex>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }

    for next in start..n {
        current.push(next);
        extend_combinations(next + 1, n, k, current, result);
        current.pop();
    }
}

fn build_matchup(
    roster: &Roster,
    id: usize,
    kind: MatchupKind,
    sides: Vec<Vec<PlayerIndex>>,
) -> Matchup {
    let mut sides: Vec<MatchupSide> = sides
        .into_iter()
        .map(|players| build_side(roster, players))
        .collect();
    sides.sort_by(|a, b| a.name.cmp(&b.name));

    Matchup { id, kind, sides }
}

fn build_side(roster: &Roster, mut players: Vec<PlayerIndex>) -> MatchupSide {
    players.sort_unstable();
    let name = roster.sorted_names(&players).join(SIDE_SEPARATOR);
    MatchupSide { players, name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    fn count(matchups: &[Matchup], kind: MatchupKind) -> usize {
        matchups.iter().filter(|m| m.kind == kind).count()
    }

    #[test]
    fn test_four_player_catalogue_size() {
        let matchups = enumerate_matchups(&roster(&["Alice", "Bob", "Carol", "Dave"]));

        assert_eq!(count(&matchups, MatchupKind::HeadToHead), 6);
        assert_eq!(count(&matchups, MatchupKind::ThreeWay), 4);
        assert_eq!(count(&matchups, MatchupKind::Team), 3);
        assert_eq!(matchups.len(), 13);
    }

    #[test]
    fn test_larger_roster_uses_all_groups() {
        let matchups = enumerate_matchups(&roster(&["A", "B", "C", "D", "E"]));

        assert_eq!(count(&matchups, MatchupKind::HeadToHead), 10);
        assert_eq!(count(&matchups, MatchupKind::ThreeWay), 10);
        assert_eq!(count(&matchups, MatchupKind::Team), 15);
    }

    #[test]
    fn test_small_rosters() {
        let pair = enumerate_matchups(&roster(&["A", "B"]));
        assert_eq!(pair.len(), 1);

        let trio = enumerate_matchups(&roster(&["A", "B", "C"]));
        assert_eq!(count(&trio, MatchupKind::ThreeWay), 1);
        assert_eq!(count(&trio, MatchupKind::Team), 0);
    }

    #[test]
    fn test_ids_ascend_and_keys_are_unique() {
        let matchups = enumerate_matchups(&roster(&["Alice", "Bob", "Carol", "Dave", "Eve"]));

        let ids: Vec<usize> = matchups.iter().map(|m| m.id).collect();
        assert_eq!(ids, (0..matchups.len()).collect::<Vec<_>>());

        let keys: HashSet<SideKey> = matchups.iter().map(|m| m.side_key()).collect();
        assert_eq!(keys.len(), matchups.len());
    }

    #[test]
    fn test_team_sides_are_named_canonically() {
        let matchups = enumerate_matchups(&roster(&["Dave", "Carol", "Bob", "Alice"]));

        let names: Vec<Vec<&str>> = matchups
            .iter()
            .filter(|m| m.kind == MatchupKind::Team)
            .map(|m| m.sides.iter().map(|s| s.name.as_str()).collect())
            .collect();

        assert_eq!(
            names,
            vec![
                vec!["Alice,Bob", "Carol,Dave"],
                vec!["Alice,Carol", "Bob,Dave"],
                vec!["Alice,Dave", "Bob,Carol"],
            ]
        );
    }

    #[test]
    fn test_head_to_head_sides() {
        let matchups = enumerate_matchups(&roster(&["Bob", "Alice"]));

        let sides: Vec<&str> = matchups[0].sides.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(sides, vec!["Alice", "Bob"]);
        assert_eq!(matchups[0].players(), vec![0, 1]);
    }
}
