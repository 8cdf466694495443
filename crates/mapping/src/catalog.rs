use std::collections::{BTreeMap, BTreeSet};

use restmap_core::{HttpMethod, MappingError, MappingResult, ResourceType};

use crate::crud_methods::CrudMethods;
use crate::supported::{CrudMethodsSupportedHttpMethods, SupportedHttpMethods};

/// Allowed methods per resource name, then per resource type.
pub type AllowedMethodsTable = BTreeMap<String, BTreeMap<ResourceType, BTreeSet<HttpMethod>>>;

/// Registry of repository-backed resources and their method policies.
///
/// Exposure is evaluated once at registration; lookups afterwards are pure.
#[derive(Debug, Clone, Default)]
pub struct RepositoryCatalog {
    resources: BTreeMap<String, CrudMethodsSupportedHttpMethods>,
}

impl RepositoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the repository backing `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        crud_methods: &CrudMethods,
    ) -> &mut Self {
        let name = name.into();
        let supported = CrudMethodsSupportedHttpMethods::new(crud_methods);
        tracing::debug!(
            resource = %name,
            exposure = ?supported.exposure(),
            "registered repository"
        );
        self.resources.insert(name, supported);
        self
    }

    /// Parse a JSON document mapping resource names to CRUD descriptors.
    ///
    /// ```json
    /// { "people": { "save": { "name": "save" }, "find_one": { "name": "findById" } } }
    /// ```
    pub fn from_json(document: &str) -> MappingResult<Self> {
        let descriptors: BTreeMap<String, CrudMethods> =
            serde_json::from_str(document).map_err(|e| MappingError::config(e.to_string()))?;

        let mut catalog = Self::new();
        for (name, crud_methods) in &descriptors {
            catalog.register(name.as_str(), crud_methods);
        }

        tracing::debug!(resources = catalog.len(), "loaded repository catalog");
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> MappingResult<CrudMethodsSupportedHttpMethods> {
        self.resources
            .get(name)
            .copied()
            .ok_or_else(|| MappingError::unknown_resource(name))
    }

    pub fn methods_for(
        &self,
        name: &str,
        resource_type: ResourceType,
    ) -> MappingResult<BTreeSet<HttpMethod>> {
        Ok(self.get(name)?.methods_for(resource_type))
    }

    pub fn supports(
        &self,
        name: &str,
        method: HttpMethod,
        resource_type: ResourceType,
    ) -> MappingResult<bool> {
        Ok(self.get(name)?.supports(method, resource_type))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Full table of allowed methods, ordered by name, type and method.
    pub fn allowed_methods(&self) -> AllowedMethodsTable {
        self.resources
            .iter()
            .map(|(name, supported)| {
                let per_type = ResourceType::ALL
                    .into_iter()
                    .map(|resource_type| (resource_type, supported.methods_for(resource_type)))
                    .collect();
                (name.clone(), per_type)
            })
            .collect()
    }
}
