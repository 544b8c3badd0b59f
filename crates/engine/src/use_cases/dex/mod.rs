//! The dex controller: runs the pipeline for a subject + version selection
//! and publishes the reconciled view.
//!
//! ```text
//! subject fetch (cancellable)
//!   -> version resolution + species record
//!   -> form resolution (selected record)
//!   -> evolution chain
//!   -> evolution forest | moves | encounters | abilities | pre-evolution hint
//!   -> projection, sprite, matchups, species info
//!   -> commit if still current
//! ```
//!
//! Every stage checks the request guard after it suspends. A superseded run
//! never touches the visible state.

mod view;

pub use view::{DexView, SpeciesInfo};

use std::sync::Arc;

use tokio::sync::RwLock;

use dexera_domain::common::normalize_key;
use dexera_domain::{available_versions, combined_matchups, project, suggest_version};

use crate::infrastructure::resources::Resources;
use crate::stores::{DexState, DexStore};
use crate::use_cases::abilities::AbilityDescriptions;
use crate::use_cases::encounters::EncounterLookup;
use crate::use_cases::evolution::EvolutionChainBuilder;
use crate::use_cases::forms::FormResolver;
use crate::use_cases::moves::MoveAggregator;
use crate::use_cases::request::{RequestGuard, RequestSequence, Superseded};
use crate::use_cases::version::{ResolvedVersion, VersionResolver};

/// A full selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DexRequest {
    pub subject: String,
    pub version: Option<String>,
    pub form: Option<String>,
}

impl DexRequest {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }
}

/// What happened to one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DexOutcome {
    /// The view was published.
    Applied,
    /// The subject could not be loaded; the failure message was published.
    Failed,
    /// A newer selection replaced this run; nothing was published.
    Superseded,
    /// No subject is selected yet.
    NothingSelected,
}

/// The pipeline components the controller coordinates.
pub struct DexPipeline {
    pub versions: Arc<VersionResolver>,
    pub forms: Arc<FormResolver>,
    pub evolution: Arc<EvolutionChainBuilder>,
    pub moves: Arc<MoveAggregator>,
    pub encounters: Arc<EncounterLookup>,
    pub abilities: Arc<AbilityDescriptions>,
}

pub struct DexController {
    resources: Arc<Resources>,
    pipeline: DexPipeline,
    store: Arc<DexStore>,
    sequence: RequestSequence,
    selection: RwLock<Option<DexRequest>>,
}

impl DexController {
    pub fn new(resources: Arc<Resources>, pipeline: DexPipeline, store: Arc<DexStore>) -> Self {
        Self {
            resources,
            pipeline,
            store,
            sequence: RequestSequence::new(),
            selection: RwLock::new(None),
        }
    }

    /// Replace the whole selection and run the pipeline.
    pub async fn show(&self, request: DexRequest) -> DexOutcome {
        let request = DexRequest {
            subject: normalize_key(&request.subject),
            version: request.version.map(|v| normalize_key(&v)).filter(|v| !v.is_empty()),
            form: request.form.map(|f| normalize_key(&f)).filter(|f| !f.is_empty()),
        };
        if request.subject.is_empty() {
            return DexOutcome::NothingSelected;
        }
        *self.selection.write().await = Some(request.clone());
        self.run(request).await
    }

    /// A different subject forgets the remembered form.
    pub async fn select_subject(&self, subject: &str) -> DexOutcome {
        let subject = normalize_key(subject);
        let request = self.selection.read().await.clone();
        let request = match request {
            Some(previous) if previous.subject == subject => previous,
            Some(previous) => DexRequest {
                subject,
                version: previous.version,
                form: None,
            },
            None => DexRequest::new(subject),
        };
        self.show(request).await
    }

    pub async fn select_version(&self, version: Option<&str>) -> DexOutcome {
        self.update(|request| request.version = version.map(String::from))
            .await
    }

    pub async fn select_form(&self, form: Option<&str>) -> DexOutcome {
        self.update(|request| request.form = form.map(String::from))
            .await
    }

    /// The visible state.
    pub async fn current(&self) -> DexState {
        self.store.snapshot().await
    }

    pub async fn selection(&self) -> Option<DexRequest> {
        self.selection.read().await.clone()
    }

    async fn update(&self, change: impl FnOnce(&mut DexRequest)) -> DexOutcome {
        let Some(mut request) = self.selection.read().await.clone() else {
            return DexOutcome::NothingSelected;
        };
        change(&mut request);
        self.show(request).await
    }

    async fn run(&self, request: DexRequest) -> DexOutcome {
        let guard = self.sequence.begin();
        let purged = self.resources.purge_expired().await;
        if purged > 0 {
            tracing::debug!(purged, "Purged expired cache entries");
        }

        let state = match self.build(&request, &guard).await {
            Ok(state) => state,
            Err(Superseded) => {
                tracing::debug!(
                    subject = %request.subject,
                    sequence = guard.sequence(),
                    "Request superseded"
                );
                return DexOutcome::Superseded;
            }
        };

        let failed = matches!(state, DexState::Failed { .. });
        if !self.store.commit(&guard, state).await {
            return DexOutcome::Superseded;
        }
        if failed {
            DexOutcome::Failed
        } else {
            tracing::info!(
                subject = %request.subject,
                version = ?request.version,
                "Dex view updated"
            );
            DexOutcome::Applied
        }
    }

    async fn build(
        &self,
        request: &DexRequest,
        guard: &RequestGuard,
    ) -> Result<DexState, Superseded> {
        let pipeline = &self.pipeline;

        let subject = tokio::select! {
            biased;
            _ = guard.cancelled() => return Err(Superseded),
            result = self.resources.pokemon(&request.subject) => result,
        };
        let subject = match subject {
            Ok(subject) => subject,
            Err(e) if e.is_not_found() => {
                tracing::warn!(subject = %request.subject, "Subject not found");
                return Ok(DexState::Failed {
                    message: format!("\"{}\" not found", request.subject),
                });
            }
            Err(e) => {
                tracing::warn!(subject = %request.subject, error = %e, "Subject unavailable");
                return Ok(DexState::Failed {
                    message: format!("Could not load \"{}\": {e}", request.subject),
                });
            }
        };
        guard.ensure_current()?;

        let (version, species) = tokio::join!(
            async {
                match request.version.as_deref() {
                    Some(version) => pipeline.versions.execute(version).await,
                    None => None,
                }
            },
            self.resources.species(&subject.species.name),
        );
        guard.ensure_current()?;
        let species = match species {
            Ok(species) => Some(species),
            Err(e) => {
                tracing::warn!(species = %subject.species.name, error = %e, "Species unavailable");
                None
            }
        };
        let scope = version.as_ref().map(ResolvedVersion::scope);
        let effective_version = version.as_ref().map(|v| v.version.as_str());

        let forms = pipeline
            .forms
            .execute(
                subject.clone(),
                species.as_deref(),
                scope.as_ref(),
                request.form.as_deref(),
                guard,
            )
            .await?;
        let record = forms.record.clone();

        let chain_link = species
            .as_ref()
            .and_then(|s| s.evolution_chain.as_ref())
            .map(|link| link.url.clone());
        let raw_chain = match chain_link {
            Some(link) => pipeline.evolution.chain(&link).await.map(|c| c.raw_tree()),
            None => None,
        };
        guard.ensure_current()?;

        let ability_names = record.all_ability_names();
        let (evolution, moves, encounters, ability_details, pre_evolution) = tokio::join!(
            pipeline
                .evolution
                .execute(raw_chain.as_ref(), scope.as_ref(), guard),
            pipeline
                .moves
                .execute(&record, species.as_deref(), scope.as_ref(), guard),
            pipeline.encounters.summary(&record.name, effective_version),
            pipeline.abilities.execute(&ability_names),
            pipeline.encounters.obtainable_pre_evolution(
                raw_chain.as_ref(),
                &subject.species.name,
                effective_version,
            ),
        );
        let evolution = evolution?;
        let moves = moves?;
        guard.ensure_current()?;

        let projected = project(
            &record.attribute_record(),
            version.as_ref().map(|v| v.generation),
        );
        let type_names: Vec<String> = projected.types.iter().map(|t| t.name.clone()).collect();

        let game_versions = subject.game_versions();
        let learnset_groups = subject.learnset_groups();
        let available = available_versions(
            game_versions.iter().map(String::as_str),
            learnset_groups.iter().map(String::as_str),
        );
        let suggested = suggest_version(&available, &game_versions, request.version.as_deref());

        let obtainable_pre_evolution = if encounters.locations.is_empty() {
            pre_evolution
        } else {
            None
        };

        let view = DexView {
            subject: request.subject.clone(),
            name: record.name.clone(),
            id: record.id,
            available_versions: available,
            suggested_version: suggested,
            matchups: combined_matchups(&type_names),
            types: projected.types,
            abilities: projected.abilities,
            stats: projected.stats,
            ability_details,
            available_forms: forms.available_forms,
            selected_form: forms.selected_form,
            evolution,
            moves,
            sprite: record.sprite_sheet().display_sprite(effective_version),
            encounters,
            obtainable_pre_evolution,
            species: SpeciesInfo::new(species.as_deref(), &record, effective_version),
            version,
        };
        Ok(DexState::Ready(Box::new(view)))
    }
}
