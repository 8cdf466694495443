//! Resource shapes an endpoint can take.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Whether an endpoint represents a collection or a single item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// e.g. `/people`
    Collection,
    /// e.g. `/people/{id}`
    Item,
}

impl ResourceType {
    pub const ALL: [ResourceType; 2] = [ResourceType::Collection, ResourceType::Item];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Collection => "collection",
            ResourceType::Item => "item",
        }
    }
}

impl core::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collection" => Ok(ResourceType::Collection),
            "item" => Ok(ResourceType::Item),
            _ => Err(MappingError::invalid_resource_type(s)),
        }
    }
}
