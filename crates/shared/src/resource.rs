//! Building blocks shared by every remote record.

use serde::{Deserialize, Serialize};

use dexera_domain::GenerationRank;

/// A `{ name, url }` link to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Generation rank when this link points at a generation record.
    pub fn generation_rank(&self) -> Option<GenerationRank> {
        GenerationRank::from_name(&self.name)
    }
}

/// A `{ url }` link without a name (evolution chains, machines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// One page of the paginated listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerboseEffect {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

pub const ENGLISH: &str = "en";

pub(crate) fn is_english(language: &NamedResource) -> bool {
    language.name == ENGLISH
}

/// English effect entry, if any.
pub fn english_effect(entries: &[VerboseEffect]) -> Option<&VerboseEffect> {
    entries.iter().find(|e| is_english(&e.language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_page_tolerates_missing_links() {
        let page: NamedResourceList = serde_json::from_str(
            r#"{"count": 2, "results": [{"name": "bulbasaur", "url": "u1"}, {"name": "ivysaur", "url": "u2"}]}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.next.is_none());
    }

    #[test]
    fn generation_links_resolve_to_ranks() {
        let link = NamedResource {
            name: "generation-iii".into(),
            url: String::new(),
        };
        assert_eq!(link.generation_rank().map(|g| g.value()), Some(3));
    }
}
