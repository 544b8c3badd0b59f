//! Learnset grouping for a generation.
//!
//! Learn data is scoped to the whole generation of the selected version: a
//! move counts when any version group of that generation teaches it.

mod details;
mod machine;

pub use details::{MoveDetails, PastMoveValues};
pub use machine::{select_machine, MachineLabel, MachineRef};

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::era::EraScope;
use crate::error::DomainError;

/// How a move is acquired. `Event` covers the source's "reminder" method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Event,
    Egg,
}

impl LearnMethod {
    pub fn source_name(self) -> &'static str {
        match self {
            Self::LevelUp => "level-up",
            Self::Machine => "machine",
            Self::Tutor => "tutor",
            Self::Event => "reminder",
            Self::Egg => "egg",
        }
    }
}

impl fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}

impl FromStr for LearnMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level-up" => Ok(Self::LevelUp),
            "machine" => Ok(Self::Machine),
            "tutor" => Ok(Self::Tutor),
            "reminder" => Ok(Self::Event),
            "egg" => Ok(Self::Egg),
            _ => Err(DomainError::parse(format!("Unknown learn method: {s}"))),
        }
    }
}

/// One per-version-group learn entry of a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnDetail {
    pub version_group: String,
    pub method: String,
    pub level: u32,
}

/// All learn entries for one move of a creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnRecord {
    pub move_name: String,
    pub details: Vec<LearnDetail>,
}

/// A move learnable through one method, before detail records are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedMove {
    pub name: String,
    pub method: LearnMethod,
    pub level: Option<u32>,
    /// The level was taken from the selected version group.
    pub level_is_exact: bool,
    pub contributing_groups: BTreeSet<String>,
}

/// Group raw learn records by method for the scope's generation.
///
/// Without a scope every version group counts. The first occurrence of a
/// move per method is kept in encounter order; level-up levels come from
/// the first entry of the exact selected version group when it has one.
pub fn group_learnset(
    records: &[LearnRecord],
    scope: Option<&EraScope>,
) -> Vec<LearnedMove> {
    let mut learned: Vec<LearnedMove> = Vec::new();

    for record in records {
        for detail in &record.details {
            if scope.is_some_and(|s| !s.includes_group(&detail.version_group)) {
                continue;
            }
            let Ok(method) = detail.method.parse::<LearnMethod>() else {
                continue;
            };

            let exact = method == LearnMethod::LevelUp
                && scope.is_some_and(|s| s.version_group() == detail.version_group);
            match learned
                .iter_mut()
                .find(|m| m.method == method && m.name == record.move_name)
            {
                Some(existing) => {
                    existing
                        .contributing_groups
                        .insert(detail.version_group.clone());
                    if exact && !existing.level_is_exact {
                        existing.level = Some(detail.level);
                        existing.level_is_exact = true;
                    }
                }
                None => learned.push(LearnedMove {
                    name: record.move_name.clone(),
                    method,
                    level: (method == LearnMethod::LevelUp).then_some(detail.level),
                    level_is_exact: exact,
                    contributing_groups: BTreeSet::from([detail.version_group.clone()]),
                }),
            }
        }
    }

    learned
}

/// A move ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEntry {
    pub name: String,
    pub level: Option<u32>,
    pub tm_number: Option<u32>,
    pub tm_label: Option<String>,
    pub details: Option<MoveDetails>,
    pub source_games: Option<String>,
    pub inherited_from: Option<String>,
}

impl MoveEntry {
    pub fn from_learned(learned: &LearnedMove, scope: Option<&EraScope>) -> Self {
        Self {
            name: learned.name.clone(),
            level: learned.level,
            tm_number: None,
            tm_label: None,
            details: None,
            source_games: scope.map(|s| s.source_games_label(&learned.contributing_groups)),
            inherited_from: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedMoves {
    pub level_up: Vec<MoveEntry>,
    pub tm: Vec<MoveEntry>,
    pub tutor: Vec<MoveEntry>,
    pub event: Vec<MoveEntry>,
    pub egg: Vec<MoveEntry>,
}

impl GroupedMoves {
    pub fn bucket(&self, method: LearnMethod) -> &[MoveEntry] {
        match method {
            LearnMethod::LevelUp => &self.level_up,
            LearnMethod::Machine => &self.tm,
            LearnMethod::Tutor => &self.tutor,
            LearnMethod::Event => &self.event,
            LearnMethod::Egg => &self.egg,
        }
    }

    fn bucket_mut(&mut self, method: LearnMethod) -> &mut Vec<MoveEntry> {
        match method {
            LearnMethod::LevelUp => &mut self.level_up,
            LearnMethod::Machine => &mut self.tm,
            LearnMethod::Tutor => &mut self.tutor,
            LearnMethod::Event => &mut self.event,
            LearnMethod::Egg => &mut self.egg,
        }
    }

    pub fn contains(&self, method: LearnMethod, name: &str) -> bool {
        self.bucket(method).iter().any(|m| m.name == name)
    }

    /// Adds an entry unless the bucket already holds that move name.
    pub fn push(&mut self, method: LearnMethod, entry: MoveEntry) -> bool {
        if self.contains(method, &entry.name) {
            return false;
        }
        self.bucket_mut(method).push(entry);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.level_up.is_empty()
            && self.tm.is_empty()
            && self.tutor.is_empty()
            && self.event.is_empty()
            && self.egg.is_empty()
    }

    /// Every referenced move name, deduplicated, in first-seen order.
    pub fn move_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        [&self.level_up, &self.tm, &self.tutor, &self.event, &self.egg]
            .into_iter()
            .flatten()
            .filter(|m| seen.insert(m.name.clone()))
            .map(|m| m.name.clone())
            .collect()
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut MoveEntry> {
        self.level_up
            .iter_mut()
            .chain(self.tm.iter_mut())
            .chain(self.tutor.iter_mut())
            .chain(self.event.iter_mut())
            .chain(self.egg.iter_mut())
    }

    /// Level-up by ascending level (missing as 0), everything else by name.
    pub fn sort(&mut self) {
        self.level_up.sort_by(|a, b| {
            a.level
                .unwrap_or(0)
                .cmp(&b.level.unwrap_or(0))
                .then_with(|| a.name.cmp(&b.name))
        });
        for bucket in [&mut self.tm, &mut self.tutor, &mut self.event, &mut self.egg] {
            bucket.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}

impl FromIterator<(LearnMethod, MoveEntry)> for GroupedMoves {
    fn from_iter<I: IntoIterator<Item = (LearnMethod, MoveEntry)>>(iter: I) -> Self {
        let mut grouped = GroupedMoves::default();
        for (method, entry) in iter {
            grouped.push(method, entry);
        }
        grouped
    }
}
