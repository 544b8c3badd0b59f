//! Evolution trees pruned to an era, with synthesized transition labels.

use serde::Serialize;

use crate::common::humanize;

/// One evolution-detail record: the trigger kind plus whichever qualifying
/// conditions the source populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionCondition {
    pub trigger: String,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub min_beauty: Option<u32>,
    pub time_of_day: Option<String>,
    pub item: Option<String>,
    pub held_item: Option<String>,
    pub known_move: Option<String>,
    pub known_move_type: Option<String>,
    pub location: Option<String>,
    pub party_species: Option<String>,
    pub party_type: Option<String>,
    pub trade_species: Option<String>,
    /// 1 female, 2 male.
    pub gender: Option<u8>,
    /// Sign of attack minus defense: 1, 0 or -1.
    pub relative_physical_stats: Option<i8>,
    pub needs_overworld_rain: bool,
    pub turn_upside_down: bool,
}

/// A node of the raw evolution graph as the source declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvolutionNode {
    pub species: String,
    pub details: Vec<EvolutionCondition>,
    pub evolves_to: Vec<RawEvolutionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionNode {
    pub name: String,
    pub children: Vec<EvolutionEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionEdge {
    pub trigger_text: String,
    pub node: EvolutionNode,
}

impl RawEvolutionNode {
    /// Every species in the graph, parents before children, in declared order.
    pub fn species_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            names.push(node.species.clone());
            stack.extend(node.evolves_to.iter().rev());
        }
        names
    }

    /// Ancestors of `target`, closest first. Empty when `target` is the root
    /// or absent from the graph.
    pub fn pre_evolutions_of(&self, target: &str) -> Vec<String> {
        let mut stack: Vec<(&RawEvolutionNode, Vec<&str>)> = vec![(self, Vec::new())];
        while let Some((node, ancestors)) = stack.pop() {
            if node.species == target {
                return ancestors.iter().rev().map(|s| s.to_string()).collect();
            }
            for child in node.evolves_to.iter().rev() {
                let mut path = ancestors.clone();
                path.push(node.species.as_str());
                stack.push((child, path));
            }
        }
        Vec::new()
    }
}

/// Label for a transition; multiple detail records are alternatives joined with " OR ".
pub fn trigger_text(details: &[EvolutionCondition]) -> String {
    if details.is_empty() {
        return "Unknown".to_string();
    }
    details
        .iter()
        .map(describe_condition)
        .collect::<Vec<_>>()
        .join(" OR ")
}

fn describe_condition(condition: &EvolutionCondition) -> String {
    let base = match condition.trigger.as_str() {
        "level-up" => match condition.min_level {
            Some(level) => format!("L{level}"),
            None => "Level up".to_string(),
        },
        "use-item" => format!(
            "Use {}",
            condition
                .item
                .as_deref()
                .map(humanize)
                .unwrap_or_else(|| "Item".to_string())
        ),
        "trade" => match (&condition.held_item, &condition.trade_species) {
            (Some(item), _) => format!("Trade ({})", humanize(item)),
            (None, Some(species)) => format!("Trade for {species}"),
            (None, None) => "Trade".to_string(),
        },
        "shed" => "Shed".to_string(),
        "other" => "Special".to_string(),
        other => humanize(other),
    };

    let qualifiers = qualifiers(condition);
    if qualifiers.is_empty() {
        base
    } else {
        format!("{base}, {}", qualifiers.join(", "))
    }
}

fn qualifiers(condition: &EvolutionCondition) -> Vec<String> {
    let mut parts = Vec::new();
    let is_trade = condition.trigger == "trade";

    if let Some(n) = condition.min_happiness {
        parts.push(format!("Happiness {n}"));
    }
    if let Some(n) = condition.min_affection {
        parts.push(format!("Affection {n}"));
    }
    if let Some(n) = condition.min_beauty {
        parts.push(format!("Beauty {n}"));
    }
    if let Some(time) = condition.time_of_day.as_deref() {
        parts.push(match time {
            "night" => "at night".to_string(),
            "day" => "during the day".to_string(),
            other => format!("at {other}"),
        });
    }
    if !is_trade {
        if let Some(item) = &condition.held_item {
            parts.push(format!("holding {}", humanize(item)));
        }
    }
    if let Some(known) = &condition.known_move {
        parts.push(format!("knowing {}", humanize(known)));
    }
    if let Some(move_type) = &condition.known_move_type {
        parts.push(format!("knowing a {move_type} move"));
    }
    if let Some(location) = &condition.location {
        parts.push(format!("at {}", humanize(location)));
    }
    if let Some(species) = &condition.party_species {
        parts.push(format!("with {species} in party"));
    }
    if let Some(party_type) = &condition.party_type {
        parts.push(format!("with a {party_type} type in party"));
    }
    if is_trade && condition.held_item.is_some() {
        if let Some(species) = &condition.trade_species {
            parts.push(format!("for {species}"));
        }
    }
    match condition.relative_physical_stats {
        Some(1) => parts.push("Atk > Def".to_string()),
        Some(0) => parts.push("Atk = Def".to_string()),
        Some(-1) => parts.push("Atk < Def".to_string()),
        _ => {}
    }
    match condition.gender {
        Some(1) => parts.push("female".to_string()),
        Some(2) => parts.push("male".to_string()),
        _ => {}
    }
    if condition.needs_overworld_rain {
        parts.push("in rain".to_string());
    }
    if condition.turn_upside_down {
        parts.push("upside down".to_string());
    }
    parts
}

enum Frame<'a> {
    Visit(&'a RawEvolutionNode),
    Assemble(&'a RawEvolutionNode, usize),
}

/// Rebuild the raw graph as a forest of era-available nodes.
///
/// Post-order over an explicit work stack: children are built first, then
/// each node is either wrapped around its built children or, when
/// `is_available` rejects it, replaced in place by those children. Promoted
/// subtrees keep the label of their own incoming transition. Sibling order
/// always follows the declared order of the source graph.
pub fn build_forest<F>(root: &RawEvolutionNode, is_available: F) -> Vec<EvolutionNode>
where
    F: Fn(&str) -> bool,
{
    // Each built entry is the (incoming label, subtree) list a node produced.
    let mut built: Vec<Vec<EvolutionEdge>> = Vec::new();
    let mut work = vec![Frame::Visit(root)];

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Visit(node) => {
                work.push(Frame::Assemble(node, built.len()));
                for child in node.evolves_to.iter().rev() {
                    work.push(Frame::Visit(child));
                }
            }
            Frame::Assemble(node, base) => {
                let children: Vec<EvolutionEdge> =
                    built.split_off(base).into_iter().flatten().collect();
                if is_available(&node.species) {
                    built.push(vec![EvolutionEdge {
                        trigger_text: trigger_text(&node.details),
                        node: EvolutionNode {
                            name: node.species.clone(),
                            children,
                        },
                    }]);
                } else {
                    built.push(children);
                }
            }
        }
    }

    built
        .into_iter()
        .flatten()
        .map(|edge| edge.node)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u32) -> EvolutionCondition {
        EvolutionCondition {
            trigger: "level-up".into(),
            min_level: Some(n),
            ..Default::default()
        }
    }

    fn item(name: &str) -> EvolutionCondition {
        EvolutionCondition {
            trigger: "use-item".into(),
            item: Some(name.into()),
            ..Default::default()
        }
    }

    fn node(
        species: &str,
        details: Vec<EvolutionCondition>,
        evolves_to: Vec<RawEvolutionNode>,
    ) -> RawEvolutionNode {
        RawEvolutionNode {
            species: species.into(),
            details,
            evolves_to,
        }
    }

    fn charmander_line() -> RawEvolutionNode {
        node(
            "charmander",
            vec![],
            vec![node(
                "charmeleon",
                vec![level(16)],
                vec![node("charizard", vec![level(36)], vec![])],
            )],
        )
    }

    fn eevee_line() -> RawEvolutionNode {
        node(
            "eevee",
            vec![],
            vec![
                node("vaporeon", vec![item("water-stone")], vec![]),
                node("jolteon", vec![item("thunder-stone")], vec![]),
                node("flareon", vec![item("fire-stone")], vec![]),
                node(
                    "espeon",
                    vec![EvolutionCondition {
                        trigger: "level-up".into(),
                        min_happiness: Some(160),
                        time_of_day: Some("day".into()),
                        ..Default::default()
                    }],
                    vec![],
                ),
            ],
        )
    }

    fn names(nodes: &[EvolutionNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn linear_chain_keeps_level_labels() {
        let forest = build_forest(&charmander_line(), |_| true);
        assert_eq!(names(&forest), vec!["charmander"]);
        let charmeleon = &forest[0].children[0];
        assert_eq!(charmeleon.trigger_text, "L16");
        assert_eq!(charmeleon.node.children[0].trigger_text, "L36");
        assert_eq!(charmeleon.node.children[0].node.name, "charizard");
    }

    #[test]
    fn unavailable_root_promotes_children_to_the_forest() {
        let forest = build_forest(&charmander_line(), |s| s != "charmander");
        assert_eq!(names(&forest), vec!["charmeleon"]);
        assert_eq!(forest[0].children[0].node.name, "charizard");
    }

    #[test]
    fn unavailable_middle_node_splices_children_onto_ancestor() {
        let forest = build_forest(&charmander_line(), |s| s != "charmeleon");
        assert_eq!(names(&forest), vec!["charmander"]);
        let edge = &forest[0].children[0];
        assert_eq!(edge.node.name, "charizard");
        assert_eq!(edge.trigger_text, "L36");
    }

    #[test]
    fn branching_order_follows_declared_order_after_pruning() {
        let forest = build_forest(&eevee_line(), |s| s != "jolteon");
        let children: Vec<_> = forest[0].children.iter().map(|e| e.node.name.as_str()).collect();
        assert_eq!(children, vec!["vaporeon", "flareon", "espeon"]);
        assert_eq!(forest[0].children[0].trigger_text, "Use water stone");
        assert_eq!(forest[0].children[2].trigger_text, "Level up, Happiness 160, during the day");
    }

    #[test]
    fn pruning_every_branch_root_preserves_all_descendants_in_order() {
        let raw = node(
            "a",
            vec![],
            vec![
                node(
                    "b",
                    vec![level(5)],
                    vec![
                        node("c", vec![level(10)], vec![]),
                        node("d", vec![level(11)], vec![]),
                    ],
                ),
                node("e", vec![level(6)], vec![]),
            ],
        );
        let forest = build_forest(&raw, |s| s != "a" && s != "b");
        assert_eq!(names(&forest), vec!["c", "d", "e"]);
    }

    #[test]
    fn building_twice_is_identical() {
        let raw = eevee_line();
        let first = build_forest(&raw, |s| s != "flareon");
        let second = build_forest(&raw, |s| s != "flareon");
        assert_eq!(first, second);
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let mut raw = node("leaf", vec![level(1)], vec![]);
        for i in 0..10_000 {
            raw = node(&format!("n{i}"), vec![level(1)], vec![raw]);
        }
        let forest = build_forest(&raw, |_| true);
        assert_eq!(forest.len(), 1);
        // Drop iteratively to keep the test itself stack-safe.
        let mut current = forest;
        while let Some(mut n) = current.pop() {
            current.extend(n.children.drain(..).map(|e| e.node));
        }
        let mut raw_stack = vec![raw];
        while let Some(mut r) = raw_stack.pop() {
            raw_stack.append(&mut r.evolves_to);
        }
    }

    #[test]
    fn trigger_text_covers_each_kind() {
        assert_eq!(trigger_text(&[]), "Unknown");
        assert_eq!(
            trigger_text(&[EvolutionCondition {
                trigger: "trade".into(),
                held_item: Some("kings-rock".into()),
                ..Default::default()
            }]),
            "Trade (kings rock)"
        );
        assert_eq!(
            trigger_text(&[EvolutionCondition {
                trigger: "trade".into(),
                trade_species: Some("shelmet".into()),
                ..Default::default()
            }]),
            "Trade for shelmet"
        );
        assert_eq!(
            trigger_text(&[EvolutionCondition {
                trigger: "shed".into(),
                ..Default::default()
            }]),
            "Shed"
        );
        assert_eq!(
            trigger_text(&[EvolutionCondition {
                trigger: "other".into(),
                ..Default::default()
            }]),
            "Special"
        );
        assert_eq!(
            trigger_text(&[EvolutionCondition {
                trigger: "three-critical-hits".into(),
                ..Default::default()
            }]),
            "three critical hits"
        );
        assert_eq!(
            trigger_text(&[EvolutionCondition {
                trigger: "use-item".into(),
                ..Default::default()
            }]),
            "Use Item"
        );
    }

    #[test]
    fn trigger_text_renders_qualifiers_and_alternatives() {
        let tyrogue_like = EvolutionCondition {
            trigger: "level-up".into(),
            min_level: Some(20),
            relative_physical_stats: Some(1),
            ..Default::default()
        };
        assert_eq!(trigger_text(&[tyrogue_like]), "L20, Atk > Def");

        let alternatives = [
            EvolutionCondition {
                trigger: "level-up".into(),
                location: Some("mt-coronet".into()),
                ..Default::default()
            },
            item("thunder-stone"),
        ];
        assert_eq!(
            trigger_text(&alternatives),
            "Level up, at mt coronet OR Use thunder stone"
        );

        let sliggoo = EvolutionCondition {
            trigger: "level-up".into(),
            min_level: Some(50),
            needs_overworld_rain: true,
            gender: Some(1),
            ..Default::default()
        };
        assert_eq!(trigger_text(&[sliggoo]), "L50, female, in rain");
    }

    #[test]
    fn pre_evolutions_are_closest_first() {
        let raw = charmander_line();
        assert_eq!(raw.pre_evolutions_of("charizard"), vec!["charmeleon", "charmander"]);
        assert!(raw.pre_evolutions_of("charmander").is_empty());
        assert!(raw.pre_evolutions_of("pikachu").is_empty());
        assert_eq!(raw.species_names(), vec!["charmander", "charmeleon", "charizard"]);
    }

    #[test]
    fn forest_serializes_with_camel_case_edges() {
        let forest = build_forest(&charmander_line(), |_| true);
        let value = serde_json::to_value(&forest).unwrap();
        assert_eq!(value[0]["name"], "charmander");
        assert_eq!(value[0]["children"][0]["triggerText"], "L16");
        assert_eq!(value[0]["children"][0]["node"]["name"], "charmeleon");
    }
}
