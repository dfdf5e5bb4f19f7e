use std::collections::BTreeMap;

use ndarray::Array1;

use crate::domain::{PlayerName, Roster};
use crate::errors::SchemaError;

pub type SkillValue = f64;
pub type ScoreMap = BTreeMap<PlayerName, f64>;

/// Skill snapshot aligned with the roster order
pub type Skills = Array1<SkillValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillSolution {
    pub skills: Skills,
    pub iterations: usize,
}

impl SkillSolution {
    pub fn skill_map(&self, roster: &Roster) -> ScoreMap {
        to_score_map(roster, &self.skills)
    }
}

pub fn to_score_map(roster: &Roster, values: &Array1<f64>) -> ScoreMap {
    roster
        .names()
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect()
}

/// Convert a name-keyed skill assignment into a roster-aligned snapshot.
/// The keys must be exactly the roster.
pub fn skills_from_map(roster: &Roster, map: &ScoreMap) -> Result<Skills, SchemaError> {
    if let Some(extra) = map.keys().find(|name| roster.index_of(name).is_none()) {
        return Err(SchemaError::UnexpectedColumn(extra.clone()));
    }

    roster
        .names()
        .iter()
        .map(|name| {
            map.get(name)
                .copied()
                .ok_or_else(|| SchemaError::MissingColumn(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Array1::from)
}
