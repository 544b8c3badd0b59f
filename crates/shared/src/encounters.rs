//! Encounter (`pokemon/{name}/encounters`) records.

use serde::{Deserialize, Serialize};

use dexera_domain::{EncounterDetail, LocationEncounters, VersionEncounters};

use crate::resource::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaEncounter {
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedResource,
    #[serde(default)]
    pub max_chance: u32,
    #[serde(default)]
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    #[serde(default)]
    pub chance: u32,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub method: Option<NamedResource>,
}

pub const UNKNOWN_METHOD: &str = "unknown";

impl From<&LocationAreaEncounter> for LocationEncounters {
    fn from(record: &LocationAreaEncounter) -> Self {
        LocationEncounters {
            location_area: record.location_area.name.clone(),
            versions: record
                .version_details
                .iter()
                .map(|v| VersionEncounters {
                    version: v.version.name.clone(),
                    details: v
                        .encounter_details
                        .iter()
                        .map(|e| EncounterDetail {
                            method: e
                                .method
                                .as_ref()
                                .map_or_else(|| UNKNOWN_METHOD.to_string(), |m| m.name.clone()),
                            chance: e.chance,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Convert a full encounters response.
pub fn location_encounters(records: &[LocationAreaEncounter]) -> Vec<LocationEncounters> {
    records.iter().map(LocationEncounters::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexera_domain::summarize;

    #[test]
    fn missing_method_is_reported_as_unknown() {
        let records: Vec<LocationAreaEncounter> = serde_json::from_str(
            r#"[{"location_area": {"name": "route-1-area", "url": ""},
                 "version_details": [{"version": {"name": "red", "url": ""}, "max_chance": 35,
                   "encounter_details": [{"chance": 20, "min_level": 2, "max_level": 4, "method": {"name": "walk", "url": ""}},
                                         {"chance": 15, "min_level": 3, "max_level": 5}]}]}]"#,
        )
        .unwrap();
        let summary = summarize(&location_encounters(&records), Some("red"));
        let methods: Vec<_> = summary.locations[0]
            .methods
            .iter()
            .map(|m| (m.method.as_str(), m.chance))
            .collect();
        assert_eq!(methods, vec![("walk", 20), ("unknown", 15)]);
    }
}
