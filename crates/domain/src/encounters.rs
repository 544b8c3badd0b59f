//! Wild encounter summaries per version.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterDetail {
    pub method: String,
    pub chance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEncounters {
    pub version: String,
    pub details: Vec<EncounterDetail>,
}

/// Encounters at one location area, across every version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEncounters {
    pub location_area: String,
    pub versions: Vec<VersionEncounters>,
}

impl LocationEncounters {
    fn in_version(&self, version: &str) -> Option<&VersionEncounters> {
        self.versions
            .iter()
            .find(|v| v.version == version)
            .filter(|v| !v.details.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRate {
    pub method: String,
    pub chance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    pub location: String,
    pub methods: Vec<MethodRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSummary {
    pub locations: Vec<LocationSummary>,
    /// Whether any encounter data exists at all, in any version.
    pub has_any_data: bool,
}

/// Group a version's encounters by location (first seen) then method (first
/// seen), summing chances. Without a version the summary is empty.
pub fn summarize(records: &[LocationEncounters], version: Option<&str>) -> EncounterSummary {
    let has_any_data = !records.is_empty();
    let Some(version) = version else {
        return EncounterSummary {
            locations: Vec::new(),
            has_any_data,
        };
    };

    let mut locations: Vec<LocationSummary> = Vec::new();
    for record in records {
        let Some(found) = record.in_version(version) else {
            continue;
        };
        let index = match locations.iter().position(|l| l.location == record.location_area) {
            Some(index) => index,
            None => {
                locations.push(LocationSummary {
                    location: record.location_area.clone(),
                    methods: Vec::new(),
                });
                locations.len() - 1
            }
        };
        let methods = &mut locations[index].methods;
        for detail in &found.details {
            match methods.iter_mut().find(|m| m.method == detail.method) {
                Some(rate) => rate.chance += detail.chance,
                None => methods.push(MethodRate {
                    method: detail.method.clone(),
                    chance: detail.chance,
                }),
            }
        }
    }

    EncounterSummary {
        locations,
        has_any_data,
    }
}

pub fn has_encounters_in(records: &[LocationEncounters], version: &str) -> bool {
    records.iter().any(|r| r.in_version(version).is_some())
}
