//! Move aggregation: grouping, historical values, TM numbers and inherited egg moves.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures_util::future::join_all;

use dexera_domain::{
    group_learnset, select_machine, EraScope, GroupedMoves, LearnMethod, MachineLabel, MoveEntry,
};
use dexera_shared::{Move, Pokemon, PokemonSpecies};

use crate::infrastructure::resources::Resources;
use crate::use_cases::request::{RequestGuard, Superseded};

/// Real evolution families are at most three deep; this only stops malformed cycles.
const MAX_ANCESTORS: usize = 8;

pub struct MoveAggregator {
    resources: Arc<Resources>,
}

impl MoveAggregator {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    pub async fn execute(
        &self,
        record: &Pokemon,
        species: Option<&PokemonSpecies>,
        scope: Option<&EraScope>,
        guard: &RequestGuard,
    ) -> Result<GroupedMoves, Superseded> {
        let mut moves: GroupedMoves = group_learnset(&record.learn_records(), scope)
            .iter()
            .map(|learned| (learned.method, MoveEntry::from_learned(learned, scope)))
            .collect();

        if let Some(species) = species {
            self.inherit_egg_moves(&mut moves, species, scope).await;
            guard.ensure_current()?;
        }

        let names = moves.move_names();
        let records = self.move_records(&names).await;
        guard.ensure_current()?;

        let selected_rank = scope.and_then(EraScope::version_group_rank);
        for entry in moves.entries_mut() {
            if let Some(record) = records.get(&entry.name) {
                entry.details = Some(record.details().for_era(selected_rank));
            }
        }

        let labels = self.machine_labels(&moves.tm, &records, scope).await;
        guard.ensure_current()?;
        for (entry, label) in moves.tm.iter_mut().zip(labels) {
            if let Some(label) = label {
                entry.tm_number = Some(label.number);
                entry.tm_label = Some(label.label);
            }
        }

        moves.sort();
        tracing::debug!(
            pokemon = %record.name,
            level_up = moves.level_up.len(),
            tm = moves.tm.len(),
            tutor = moves.tutor.len(),
            event = moves.event.len(),
            egg = moves.egg.len(),
            "Aggregated moves"
        );
        Ok(moves)
    }

    /// Walk `evolves_from` upwards, closest ancestor first, appending each
    /// ancestor's egg moves that the bucket does not already hold.
    async fn inherit_egg_moves(
        &self,
        moves: &mut GroupedMoves,
        species: &PokemonSpecies,
        scope: Option<&EraScope>,
    ) {
        let mut visited: HashSet<String> = HashSet::from([species.name.clone()]);
        let mut parent = species.evolves_from_species.as_ref().map(|s| s.name.clone());

        while let Some(ancestor) = parent.take() {
            if !visited.insert(ancestor.clone()) || visited.len() > MAX_ANCESTORS {
                break;
            }
            let ancestor_species = match self.resources.species(&ancestor).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!(
                        species = %ancestor,
                        error = %e,
                        "Ancestor species unavailable"
                    );
                    break;
                }
            };
            parent = ancestor_species
                .evolves_from_species
                .as_ref()
                .map(|s| s.name.clone());

            let record = match self.resources.pokemon(&ancestor).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!(pokemon = %ancestor, error = %e, "Ancestor record unavailable");
                    continue;
                }
            };
            for learned in group_learnset(&record.learn_records(), scope)
                .iter()
                .filter(|l| l.method == LearnMethod::Egg)
            {
                let mut entry = MoveEntry::from_learned(learned, scope);
                entry.inherited_from = Some(ancestor.clone());
                moves.push(LearnMethod::Egg, entry);
            }
        }
    }

    /// Fetch every referenced move once; failures simply leave no details.
    async fn move_records(&self, names: &[String]) -> HashMap<String, Arc<Move>> {
        let results = join_all(names.iter().map(|name| self.resources.move_record(name))).await;
        names
            .iter()
            .zip(results)
            .filter_map(|(name, result)| match result {
                Ok(record) => Some((name.clone(), record)),
                Err(e) => {
                    tracing::debug!(name = %name, error = %e, "Move details unavailable");
                    None
                }
            })
            .collect()
    }

    async fn machine_labels(
        &self,
        entries: &[MoveEntry],
        records: &HashMap<String, Arc<Move>>,
        scope: Option<&EraScope>,
    ) -> Vec<Option<MachineLabel>> {
        join_all(entries.iter().map(|entry| async move {
            let refs = records.get(&entry.name)?.machine_refs();
            let machine_ref = select_machine(&refs, scope)?;
            match self.resources.machine(&machine_ref.machine_url).await {
                Ok(machine) => machine.label(),
                Err(e) => {
                    tracing::debug!(name = %entry.name, error = %e, "Machine unavailable");
                    None
                }
            }
        }))
        .await
    }
}
