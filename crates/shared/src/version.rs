//! Version (`version/{name}`) and version-group (`version-group/{name}`) records.

use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: u32,
    pub name: String,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroup {
    pub id: u32,
    pub name: String,
    pub generation: NamedResource,
    #[serde(default)]
    pub versions: Vec<NamedResource>,
}
