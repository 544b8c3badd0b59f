//! Defensive type matchups for one or two types.

use serde::Serialize;

struct Matchup {
    resists: &'static [&'static str],
    weak: &'static [&'static str],
    immune: &'static [&'static str],
}

const CHART: &[(&str, Matchup)] = &[
    ("normal", Matchup { resists: &[], weak: &["fighting"], immune: &["ghost"] }),
    (
        "fire",
        Matchup {
            resists: &["fire", "grass", "ice", "bug", "steel", "fairy"],
            weak: &["water", "ground", "rock"],
            immune: &[],
        },
    ),
    (
        "water",
        Matchup {
            resists: &["fire", "water", "ice", "steel"],
            weak: &["electric", "grass"],
            immune: &[],
        },
    ),
    ("electric", Matchup { resists: &["flying", "steel"], weak: &["ground"], immune: &[] }),
    (
        "grass",
        Matchup {
            resists: &["ground", "water", "grass"],
            weak: &["fire", "ice", "poison", "flying", "bug"],
            immune: &[],
        },
    ),
    (
        "ice",
        Matchup {
            resists: &["ice"],
            weak: &["fire", "fighting", "rock", "steel"],
            immune: &[],
        },
    ),
    (
        "fighting",
        Matchup {
            resists: &["rock", "bug", "dark"],
            weak: &["flying", "psychic", "fairy"],
            immune: &[],
        },
    ),
    (
        "poison",
        Matchup {
            resists: &["fighting", "poison", "bug", "grass"],
            weak: &["ground", "psychic"],
            immune: &[],
        },
    ),
    (
        "ground",
        Matchup {
            resists: &["poison", "rock"],
            weak: &["water", "grass", "ice"],
            immune: &["electric"],
        },
    ),
    (
        "flying",
        Matchup {
            resists: &["fighting", "bug", "grass"],
            weak: &["electric", "ice", "rock"],
            immune: &["ground"],
        },
    ),
    (
        "psychic",
        Matchup {
            resists: &["fighting", "psychic"],
            weak: &["bug", "ghost", "dark"],
            immune: &[],
        },
    ),
    (
        "bug",
        Matchup {
            resists: &["fighting", "ground", "grass"],
            weak: &["fire", "flying", "rock"],
            immune: &[],
        },
    ),
    (
        "rock",
        Matchup {
            resists: &["normal", "flying", "poison", "fire"],
            weak: &["water", "grass", "fighting", "ground", "steel"],
            immune: &[],
        },
    ),
    (
        "ghost",
        Matchup {
            resists: &["poison", "bug"],
            weak: &["ghost", "dark"],
            immune: &["normal", "fighting"],
        },
    ),
    (
        "dragon",
        Matchup {
            resists: &["fire", "water", "grass", "electric"],
            weak: &["ice", "dragon", "fairy"],
            immune: &[],
        },
    ),
    (
        "dark",
        Matchup {
            resists: &["ghost", "dark"],
            weak: &["fighting", "bug", "fairy"],
            immune: &["psychic"],
        },
    ),
    (
        "steel",
        Matchup {
            resists: &[
                "normal", "flying", "rock", "bug", "steel", "grass", "psychic", "ice", "dragon",
                "fairy",
            ],
            weak: &["fire", "water", "ground"],
            immune: &["poison"],
        },
    ),
    (
        "fairy",
        Matchup {
            resists: &["fighting", "bug", "dark"],
            weak: &["poison", "steel"],
            immune: &["dragon"],
        },
    ),
];

fn matchup(type_name: &str) -> Option<&'static Matchup> {
    CHART.iter().find(|(name, _)| *name == type_name).map(|(_, m)| m)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMatchups {
    pub immune: Vec<String>,
    pub very_resistant: Vec<String>,
    pub resists: Vec<String>,
    pub weak: Vec<String>,
    pub very_weak: Vec<String>,
}

/// Insertion-ordered set of attacking type names.
#[derive(Default)]
struct OrderedSet(Vec<&'static str>);

impl OrderedSet {
    fn insert(&mut self, value: &'static str) {
        if !self.0.contains(&value) {
            self.0.push(value);
        }
    }

    fn remove(&mut self, value: &str) {
        self.0.retain(|v| *v != value);
    }

    fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(String::from).collect()
    }
}

/// Combined defensive matchups. For dual types, attackers both types are weak
/// to become "very weak" and attackers both resist become "very resistant";
/// weaknesses then cancel resistances and immunities override everything.
/// Returns `None` for an empty type list.
pub fn combined_matchups(types: &[String]) -> Option<TypeMatchups> {
    if types.is_empty() {
        return None;
    }

    let mut resists = OrderedSet::default();
    let mut weak = OrderedSet::default();
    let mut very_weak = OrderedSet::default();
    let mut very_resistant = OrderedSet::default();
    let mut immune = OrderedSet::default();

    for m in types.iter().filter_map(|t| matchup(t)) {
        m.resists.iter().for_each(|t| resists.insert(*t));
        m.weak.iter().for_each(|t| weak.insert(*t));
        m.immune.iter().for_each(|t| immune.insert(*t));
    }

    if let [first, second] = types {
        let (a, b) = (matchup(first), matchup(second));
        let weak_a = a.map_or(&[][..], |m| m.weak);
        let weak_b = b.map_or(&[][..], |m| m.weak);
        for t in weak_a.iter().filter(|t| weak_b.contains(*t)) {
            very_weak.insert(*t);
            weak.remove(t);
        }
        let resists_a = a.map_or(&[][..], |m| m.resists);
        let resists_b = b.map_or(&[][..], |m| m.resists);
        for t in resists_a.iter().filter(|t| resists_b.contains(*t)) {
            very_resistant.insert(*t);
            resists.remove(t);
        }
    }

    for t in weak.0.iter().chain(very_weak.0.iter()) {
        resists.remove(t);
        very_resistant.remove(t);
    }
    for t in &immune.0 {
        resists.remove(t);
        weak.remove(t);
        very_weak.remove(t);
        very_resistant.remove(t);
    }

    Some(TypeMatchups {
        immune: immune.into_strings(),
        very_resistant: very_resistant.into_strings(),
        resists: resists.into_strings(),
        weak: weak.into_strings(),
        very_weak: very_weak.into_strings(),
    })
}
