use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::MethodRouter,
};

use restmap_core::{HttpMethod, MappingResult, ResourceType};
use restmap_mapping::{RepositoryCatalog, SupportedHttpMethods};

use crate::allow::{allow_header_value, policy_method};
use crate::errors::method_not_allowed;

/// Policy of one guarded endpoint: the resource's supported methods plus the
/// shape the endpoint has.
#[derive(Clone)]
pub struct MethodPolicy {
    supported: Arc<dyn SupportedHttpMethods>,
    resource_type: ResourceType,
}

impl MethodPolicy {
    pub fn new(supported: Arc<dyn SupportedHttpMethods>, resource_type: ResourceType) -> Self {
        Self {
            supported,
            resource_type,
        }
    }

    /// Policy for the catalog entry `name`.
    pub fn for_resource(
        catalog: &RepositoryCatalog,
        name: &str,
        resource_type: ResourceType,
    ) -> MappingResult<Self> {
        Ok(Self::new(Arc::new(catalog.get(name)?), resource_type))
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn allowed_methods(&self) -> BTreeSet<HttpMethod> {
        self.supported.methods_for(self.resource_type)
    }
}

/// Wrap a route so disallowed methods never reach its handlers.
pub fn guarded<S>(route: MethodRouter<S>, policy: MethodPolicy) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.layer(axum::middleware::from_fn_with_state(policy, method_guard))
}

/// Reject methods the policy does not allow and answer `OPTIONS` directly.
///
/// - unknown or disallowed method: 405 with `Allow` and a JSON reason
/// - `OPTIONS`: 204 with `Allow`
/// - anything else: passed to the wrapped handler
pub async fn method_guard(
    State(policy): State<MethodPolicy>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let allow = allow_header_value(&policy.allowed_methods());

    let method = match policy_method(req.method()) {
        Ok(method) => method,
        Err(err) => {
            tracing::debug!(method = %req.method(), "rejected unknown http method");
            return method_not_allowed(allow, err.to_string());
        }
    };

    if method == HttpMethod::Options {
        return (StatusCode::NO_CONTENT, [(header::ALLOW, allow)]).into_response();
    }

    if !policy.supported.supports(method, policy.resource_type) {
        let decision = policy.supported.explain(method, policy.resource_type);
        tracing::debug!(
            method = %method,
            resource_type = %policy.resource_type,
            missing = ?decision.missing,
            "rejected disallowed http method"
        );
        return method_not_allowed(allow, decision.reason);
    }

    next.run(req).await
}
