//! Three-way diff between stored skills and the skills an update asks for.
//!
//! Keyed by skill type: requested types that are not stored are added, stored
//! types that are not requested are removed, and types present on both sides
//! are updated when level or duration differ.

use crate::models::{Skill, SkillLevel};
use std::collections::{BTreeMap, BTreeSet};

/// A requested skill with its level code already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillChange {
    pub skill_type_id: i32,
    pub level: SkillLevel,
    pub duration: i32,
}

/// Outcome of [`diff`], each list ordered by skill type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDiff {
    pub added: Vec<SkillChange>,
    pub updated: Vec<SkillChange>,
    pub removed: Vec<i32>,
}

impl SkillDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Compare the current skills with the requested ones.
///
/// Requested entries are expected to have distinct skill types; on duplicates
/// the last entry wins.
pub fn diff<'a>(current: impl IntoIterator<Item = &'a Skill>, requested: &[SkillChange]) -> SkillDiff {
    let current: BTreeMap<i32, &Skill> = current.into_iter().map(|s| (s.skill_type_id, s)).collect();
    let requested: BTreeMap<i32, &SkillChange> = requested.iter().map(|c| (c.skill_type_id, c)).collect();

    let current_types: BTreeSet<i32> = current.keys().copied().collect();
    let requested_types: BTreeSet<i32> = requested.keys().copied().collect();

    let added = requested_types
        .difference(&current_types)
        .map(|t| *requested[t])
        .collect();

    let updated = requested_types
        .intersection(&current_types)
        .filter_map(|t| {
            let wanted = requested[t];
            let stored = current[t];
            (stored.level != wanted.level || stored.duration != wanted.duration).then_some(*wanted)
        })
        .collect();

    let removed = current_types.difference(&requested_types).copied().collect();

    SkillDiff { added, updated, removed }
}
