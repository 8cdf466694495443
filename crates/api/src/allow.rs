use std::collections::BTreeSet;

use axum::http::Method;

use restmap_core::{HttpMethod, MappingResult};

/// Render an `Allow` header value, e.g. `GET, HEAD, POST, OPTIONS`.
pub fn allow_header_value(methods: &BTreeSet<HttpMethod>) -> String {
    methods
        .iter()
        .map(HttpMethod::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Map a request method onto the policy's verbs.
///
/// Extension methods and verbs the policy never grants (`TRACE`, `CONNECT`)
/// fail with `UnknownHttpMethod`.
pub fn policy_method(method: &Method) -> MappingResult<HttpMethod> {
    method.as_str().parse()
}

#[cfg(test)]
mod tests {
    use restmap_core::MappingError;

    use super::*;

    #[test]
    fn renders_in_canonical_order() {
        let methods = BTreeSet::from([
            HttpMethod::Options,
            HttpMethod::Post,
            HttpMethod::Head,
            HttpMethod::Get,
        ]);

        assert_eq!(allow_header_value(&methods), "GET, HEAD, POST, OPTIONS");
    }

    #[test]
    fn options_alone() {
        assert_eq!(
            allow_header_value(&BTreeSet::from([HttpMethod::Options])),
            "OPTIONS"
        );
    }

    #[test]
    fn maps_standard_methods() {
        assert_eq!(policy_method(&Method::PATCH), Ok(HttpMethod::Patch));
        assert_eq!(policy_method(&Method::OPTIONS), Ok(HttpMethod::Options));
        assert_eq!(
            policy_method(&Method::TRACE),
            Err(MappingError::UnknownHttpMethod("TRACE".to_string()))
        );
    }
}
