//! Explanation of a single method decision.
//!
//! Answers "why is `DELETE /people/1` rejected?" with the operations the rule
//! table asks for and the ones the repository does not expose.

use serde::Serialize;

use restmap_core::{HttpMethod, ResourceType};

use crate::crud_methods::CrudOperation;
use crate::exposure::ExposureAwareCrudMethods;
use crate::rules;

/// Outcome of one `supports` query, with its reasoning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDecision {
    pub method: HttpMethod,
    pub resource_type: ResourceType,

    /// Same answer `supports` gives.
    pub allowed: bool,

    /// Operations the rule table requires (empty if the pair has no rule).
    pub required: Vec<CrudOperation>,

    /// Required operations the repository does not expose.
    pub missing: Vec<CrudOperation>,

    /// Human-readable reason for the decision.
    pub reason: String,
}

impl MethodDecision {
    /// Decision from a policy that reports no CRUD requirements.
    pub fn verdict_only(method: HttpMethod, resource_type: ResourceType, allowed: bool) -> Self {
        let reason = if allowed {
            format!("{method} is supported on {resource_type} resources")
        } else {
            format!("{method} is not supported on {resource_type} resources")
        };

        Self {
            method,
            resource_type,
            allowed,
            required: Vec::new(),
            missing: Vec::new(),
            reason,
        }
    }
}

pub fn explain(
    method: HttpMethod,
    resource_type: ResourceType,
    exposure: &(impl ExposureAwareCrudMethods + ?Sized),
) -> MethodDecision {
    let Some(required) = rules::required_operations(resource_type, method) else {
        return MethodDecision {
            method,
            resource_type,
            allowed: false,
            required: Vec::new(),
            missing: Vec::new(),
            reason: format!("{method} is never supported on {resource_type} resources"),
        };
    };

    let missing: Vec<CrudOperation> = required
        .iter()
        .copied()
        .filter(|op| !exposure.exposes(*op))
        .collect();

    let reason = if required.is_empty() {
        format!("{method} is always supported")
    } else if missing.is_empty() {
        format!(
            "{method} on {resource_type} resources requires {}, all exposed",
            join(required)
        )
    } else {
        format!(
            "{method} on {resource_type} resources requires {}; not exposed: {}",
            join(required),
            join(&missing)
        )
    };

    MethodDecision {
        method,
        resource_type,
        allowed: missing.is_empty(),
        required: required.to_vec(),
        missing,
        reason,
    }
}

fn join(ops: &[CrudOperation]) -> String {
    ops.iter()
        .map(CrudOperation::as_str)
        .collect::<Vec<_>>()
        .join(" + ")
}
