//! The rule table: which CRUD operations each (resource type, method) pair
//! needs.
//!
//! A pair missing from [`RULES`] is never supported, whatever the repository
//! exposes. `OPTIONS` needs nothing and is listed for both shapes.

use restmap_core::{HttpMethod, ResourceType};

use crate::crud_methods::CrudOperation;

use CrudOperation::{Delete, FindAll, FindOne, Save};
use ResourceType::{Collection, Item};

/// One row of the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rule {
    pub resource_type: ResourceType,
    pub method: HttpMethod,
    /// All of these must be exposed for the method to be supported.
    pub requires: &'static [CrudOperation],
}

const fn rule(
    resource_type: ResourceType,
    method: HttpMethod,
    requires: &'static [CrudOperation],
) -> Rule {
    Rule {
        resource_type,
        method,
        requires,
    }
}

pub const RULES: &[Rule] = &[
    rule(Collection, HttpMethod::Options, &[]),
    rule(Collection, HttpMethod::Get, &[FindAll]),
    rule(Collection, HttpMethod::Head, &[FindAll]),
    rule(Collection, HttpMethod::Post, &[Save]),
    rule(Item, HttpMethod::Options, &[]),
    // Deleting needs the item to be resolvable first.
    rule(Item, HttpMethod::Delete, &[Delete, FindOne]),
    rule(Item, HttpMethod::Get, &[FindOne]),
    rule(Item, HttpMethod::Head, &[FindOne]),
    rule(Item, HttpMethod::Put, &[Save]),
    rule(Item, HttpMethod::Patch, &[Save]),
];

/// Operations required for `method` on `resource_type`, or `None` if the pair
/// is never supported.
pub fn required_operations(
    resource_type: ResourceType,
    method: HttpMethod,
) -> Option<&'static [CrudOperation]> {
    RULES
        .iter()
        .find(|r| r.resource_type == resource_type && r.method == method)
        .map(|r| r.requires)
}

/// Rows that apply to one shape.
pub fn rules_for(resource_type: ResourceType) -> impl Iterator<Item = &'static Rule> {
    RULES.iter().filter(move |r| r.resource_type == resource_type)
}
