//! Whether a creature or form exists in a selected era, and which versions a
//! creature appears in at all.

use std::collections::BTreeSet;

use crate::era::{generation_of_version_group, version_group_info, version_order, EraScope};

/// What a fetched record tells us about the versions it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityEvidence {
    /// A full creature record: its game-index versions plus the version
    /// groups named anywhere in its learnset.
    Creature {
        game_versions: Vec<String>,
        learnset_groups: BTreeSet<String>,
    },
    /// A lightweight form record, which only names the version group it was introduced in.
    Form { version_group: Option<String> },
}

impl AvailabilityEvidence {
    /// Modern game-index lists are empty, so a learnset entry for the selected
    /// version group counts as evidence too.
    pub fn is_available_in(&self, scope: &EraScope) -> bool {
        match self {
            Self::Creature {
                game_versions,
                learnset_groups,
            } => {
                game_versions.iter().any(|v| v == scope.version())
                    || learnset_groups.contains(scope.version_group())
            }
            Self::Form { version_group } => match version_group.as_deref() {
                Some(group) if group == scope.version_group() => true,
                Some(group) => generation_of_version_group(group) == Some(scope.generation()),
                None => false,
            },
        }
    }
}

/// Every version a creature appears in: game-index versions plus the versions
/// of every version group in its learnset, in release order.
pub fn available_versions<'a, G, L>(game_versions: G, learnset_groups: L) -> Vec<String>
where
    G: IntoIterator<Item = &'a str>,
    L: IntoIterator<Item = &'a str>,
{
    let mut versions: BTreeSet<String> = game_versions.into_iter().map(String::from).collect();
    for group in learnset_groups {
        if let Some(info) = version_group_info(group) {
            versions.extend(info.versions.iter().map(|v| v.to_string()));
        }
    }

    let mut ordered: Vec<String> = versions.into_iter().collect();
    ordered.sort_by_key(|v| (version_order(v).unwrap_or(usize::MAX), v.clone()));
    ordered
}

/// Default version for a newly shown creature: keep the previous choice when
/// it still applies, else the last game-index version, else the first available.
pub fn suggest_version(
    available: &[String],
    game_versions: &[String],
    previous: Option<&str>,
) -> Option<String> {
    if let Some(previous) = previous {
        if available.iter().any(|v| v == previous) {
            return Some(previous.to_string());
        }
    }
    if available.is_empty() {
        return None;
    }
    game_versions
        .last()
        .or_else(|| available.first())
        .cloned()
}
