pub type PlayerName = String;
pub type PlayerIndex = usize;

/// Fixed, ordered set of player identifiers. The order is the column order of
/// the participation table.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    names: Vec<PlayerName>,
    reference: PlayerIndex,
}

impl Roster {
    /// Build a roster; `None` when there are no players.
    pub fn new(names: Vec<PlayerName>) -> Option<Self> {
        let reference = find_reference(&names)?;
        Some(Self { names, reference })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[PlayerName] {
        &self.names
    }

    pub fn name(&self, index: PlayerIndex) -> &str {
        &self.names[index]
    }

    pub fn index_of(&self, name: &str) -> Option<PlayerIndex> {
        self.names.iter().position(|n| n == name)
    }

    /// Index of the player whose skill is pinned to 1.0
    pub fn reference_index(&self) -> PlayerIndex {
        self.reference
    }

    pub fn reference_player(&self) -> &str {
        self.name(self.reference)
    }

    /// Player names for a group of indices, sorted lexicographically
    pub fn sorted_names(&self, indices: &[PlayerIndex]) -> Vec<PlayerName> {
        let mut names: Vec<PlayerName> = indices.iter().map(|&i| self.names[i].clone()).collect();
        names.sort();
        names
    }
}

fn find_reference(names: &[PlayerName]) -> Option<PlayerIndex> {
    names
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
}
