//! Form resolution: candidate forms, era filtering, selection and the
//! record to display for the selected form.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;

use dexera_domain::{candidate_forms, select_form, EraScope};
use dexera_shared::{Pokemon, PokemonSpecies};

use crate::infrastructure::resources::Resources;
use crate::use_cases::availability::EraAvailability;
use crate::use_cases::request::{RequestGuard, Superseded};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedForms {
    pub available_forms: Vec<String>,
    pub selected_form: Option<String>,
    /// Record to display: the selected form's own record, a hybrid built from
    /// its form record, or the subject itself.
    #[serde(skip)]
    pub record: Arc<Pokemon>,
}

pub struct FormResolver {
    resources: Arc<Resources>,
    availability: Arc<EraAvailability>,
}

impl FormResolver {
    pub fn new(resources: Arc<Resources>, availability: Arc<EraAvailability>) -> Self {
        Self {
            resources,
            availability,
        }
    }

    pub async fn execute(
        &self,
        subject: Arc<Pokemon>,
        species: Option<&PokemonSpecies>,
        scope: Option<&EraScope>,
        preferred: Option<&str>,
        guard: &RequestGuard,
    ) -> Result<ResolvedForms, Superseded> {
        let varieties = species.map(PokemonSpecies::variety_names).unwrap_or_default();
        let native_forms = subject.forms.iter().map(|f| f.name.as_str());
        let candidates = candidate_forms(&subject.name, varieties, native_forms);

        let available_forms = match scope {
            Some(scope) => {
                let checks = join_all(
                    candidates
                        .iter()
                        .map(|name| self.availability.record_available(name, scope)),
                )
                .await;
                guard.ensure_current()?;
                candidates
                    .into_iter()
                    .zip(checks)
                    .filter_map(|(name, available)| available.then_some(name))
                    .collect()
            }
            None => candidates,
        };

        let selected_form = select_form(&available_forms, preferred);
        let record = match selected_form.as_deref() {
            Some(form) if form != subject.name => self.form_record(&subject, form).await,
            _ => subject,
        };
        guard.ensure_current()?;

        tracing::debug!(
            forms = available_forms.len(),
            selected = ?selected_form,
            "Resolved forms"
        );
        Ok(ResolvedForms {
            available_forms,
            selected_form,
            record,
        })
    }

    async fn form_record(&self, subject: &Arc<Pokemon>, form: &str) -> Arc<Pokemon> {
        if let Ok(record) = self.resources.pokemon(form).await {
            return record;
        }
        match self.resources.pokemon_form(form).await {
            Ok(form_record) => Arc::new(subject.with_form_overrides(&form_record)),
            Err(e) => {
                tracing::warn!(form = %form, error = %e, "Form record unavailable, showing base");
                subject.clone()
            }
        }
    }
}
