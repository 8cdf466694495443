use std::collections::BTreeSet;

use restmap_core::{HttpMethod, MappingResult, ResourceType};

use crate::crud_methods::CrudMethods;
use crate::explain::MethodDecision;
use crate::exposure::{ExposureAwareCrudMethods, ExposureFlags};
use crate::rules;

/// Answers which HTTP methods a resource accepts.
///
/// Implementations are shared across request handlers, hence `Send + Sync`.
pub trait SupportedHttpMethods: Send + Sync {
    /// Every method accepted on a resource of the given type.
    fn methods_for(&self, resource_type: ResourceType) -> BTreeSet<HttpMethod>;

    fn supports(&self, method: HttpMethod, resource_type: ResourceType) -> bool {
        self.methods_for(resource_type).contains(&method)
    }

    /// Why `method` is or is not accepted.
    ///
    /// Policies that know nothing about CRUD exposure only report the verdict.
    fn explain(&self, method: HttpMethod, resource_type: ResourceType) -> MethodDecision {
        MethodDecision::verdict_only(method, resource_type, self.supports(method, resource_type))
    }
}

/// Methods permitted by the CRUD methods a repository exposes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CrudMethodsSupportedHttpMethods {
    exposure: ExposureFlags,
}

impl CrudMethodsSupportedHttpMethods {
    pub fn new(crud_methods: &CrudMethods) -> Self {
        Self::from_exposure(ExposureFlags::from(crud_methods))
    }

    pub fn from_exposure(exposure: ExposureFlags) -> Self {
        Self { exposure }
    }

    pub fn exposure(&self) -> ExposureFlags {
        self.exposure
    }
}

impl SupportedHttpMethods for CrudMethodsSupportedHttpMethods {
    fn methods_for(&self, resource_type: ResourceType) -> BTreeSet<HttpMethod> {
        methods_for(resource_type, &self.exposure)
    }

    fn supports(&self, method: HttpMethod, resource_type: ResourceType) -> bool {
        supports(method, resource_type, &self.exposure)
    }

    fn explain(&self, method: HttpMethod, resource_type: ResourceType) -> MethodDecision {
        crate::explain::explain(method, resource_type, &self.exposure)
    }
}

/// Methods permitted on `resource_type` given what the repository exposes.
///
/// `OPTIONS` is always part of the result.
pub fn methods_for(
    resource_type: ResourceType,
    exposure: &(impl ExposureAwareCrudMethods + ?Sized),
) -> BTreeSet<HttpMethod> {
    rules::rules_for(resource_type)
        .filter(|rule| rule.requires.iter().all(|op| exposure.exposes(*op)))
        .map(|rule| rule.method)
        .collect()
}

pub fn supports(
    method: HttpMethod,
    resource_type: ResourceType,
    exposure: &(impl ExposureAwareCrudMethods + ?Sized),
) -> bool {
    rules::required_operations(resource_type, method)
        .is_some_and(|requires| requires.iter().all(|op| exposure.exposes(*op)))
}

/// [`methods_for`] keyed by a raw resource type name.
///
/// Unknown names fail with `InvalidResourceType`; they never yield an empty
/// set.
pub fn methods_for_name(
    resource_type: &str,
    exposure: &(impl ExposureAwareCrudMethods + ?Sized),
) -> MappingResult<BTreeSet<HttpMethod>> {
    let resource_type = parse_resource_type(resource_type)?;
    Ok(methods_for(resource_type, exposure))
}

/// [`supports`] keyed by a raw resource type name.
pub fn supports_name(
    method: HttpMethod,
    resource_type: &str,
    exposure: &(impl ExposureAwareCrudMethods + ?Sized),
) -> MappingResult<bool> {
    let resource_type = parse_resource_type(resource_type)?;
    Ok(supports(method, resource_type, exposure))
}

fn parse_resource_type(name: &str) -> MappingResult<ResourceType> {
    name.parse().inspect_err(|err| {
        tracing::warn!(resource_type = name, error = %err, "rejected resource type");
    })
}

#[cfg(test)]
mod tests {
    use restmap_core::MappingError;

    use super::*;
    use crate::crud_methods::{CrudMethod, CrudOperation};

    fn set(methods: &[HttpMethod]) -> BTreeSet<HttpMethod> {
        methods.iter().copied().collect()
    }

    fn flags(save: bool, delete: bool, find_one: bool, find_all: bool) -> ExposureFlags {
        ExposureFlags {
            save,
            delete,
            find_one,
            find_all,
        }
    }

    #[test]
    fn item_without_delete() {
        let exposure = flags(true, false, true, true);

        assert_eq!(
            methods_for(ResourceType::Item, &exposure),
            set(&[
                HttpMethod::Options,
                HttpMethod::Get,
                HttpMethod::Head,
                HttpMethod::Put,
                HttpMethod::Patch,
            ])
        );
    }

    #[test]
    fn collection_with_save_and_find_all() {
        let exposure = flags(true, false, true, true);

        assert_eq!(
            methods_for(ResourceType::Collection, &exposure),
            set(&[
                HttpMethod::Options,
                HttpMethod::Get,
                HttpMethod::Head,
                HttpMethod::Post,
            ])
        );
    }

    #[test]
    fn delete_requires_find_one() {
        let exposure = flags(false, true, false, false);

        assert!(!supports(HttpMethod::Delete, ResourceType::Item, &exposure));
        assert_eq!(
            methods_for(ResourceType::Item, &exposure),
            set(&[HttpMethod::Options])
        );
    }

    #[test]
    fn nothing_exposed_still_allows_options() {
        let exposure = ExposureFlags::none();

        for resource_type in ResourceType::ALL {
            assert_eq!(
                methods_for(resource_type, &exposure),
                set(&[HttpMethod::Options])
            );
        }
    }

    #[test]
    fn everything_exposed() {
        let exposure = ExposureFlags::all();

        assert_eq!(
            methods_for(ResourceType::Collection, &exposure),
            set(&[
                HttpMethod::Get,
                HttpMethod::Head,
                HttpMethod::Post,
                HttpMethod::Options,
            ])
        );
        assert_eq!(
            methods_for(ResourceType::Item, &exposure),
            set(&[
                HttpMethod::Get,
                HttpMethod::Head,
                HttpMethod::Put,
                HttpMethod::Patch,
                HttpMethod::Delete,
                HttpMethod::Options,
            ])
        );
    }

    #[test]
    fn unexported_find_all_hides_collection_reads() {
        let methods = CrudMethods::full()
            .with(CrudOperation::FindAll, CrudMethod::new("findAll").unexported());
        let supported = CrudMethodsSupportedHttpMethods::new(&methods);

        assert!(!supported.supports(HttpMethod::Get, ResourceType::Collection));
        assert!(!supported.supports(HttpMethod::Head, ResourceType::Collection));
        assert!(supported.supports(HttpMethod::Post, ResourceType::Collection));
        assert!(supported.supports(HttpMethod::Get, ResourceType::Item));
    }

    #[test]
    fn trait_object_default_supports_matches_override() {
        let supported =
            CrudMethodsSupportedHttpMethods::from_exposure(flags(true, true, true, false));
        let dynamic: &dyn SupportedHttpMethods = &supported;

        for resource_type in ResourceType::ALL {
            let allowed = dynamic.methods_for(resource_type);
            for method in HttpMethod::ALL {
                assert_eq!(
                    dynamic.supports(method, resource_type),
                    allowed.contains(&method)
                );
            }
        }
    }

    #[test]
    fn crud_policy_explains_through_the_trait() {
        let supported =
            CrudMethodsSupportedHttpMethods::from_exposure(flags(false, true, false, true));
        let dynamic: &dyn SupportedHttpMethods = &supported;

        let decision = dynamic.explain(HttpMethod::Delete, ResourceType::Item);

        assert!(!decision.allowed);
        assert_eq!(decision.missing, vec![CrudOperation::FindOne]);
    }

    struct ReadOnly;

    impl SupportedHttpMethods for ReadOnly {
        fn methods_for(&self, _resource_type: ResourceType) -> BTreeSet<HttpMethod> {
            set(&[HttpMethod::Get, HttpMethod::Head, HttpMethod::Options])
        }
    }

    #[test]
    fn other_policies_get_a_verdict_only_explanation() {
        let decision = ReadOnly.explain(HttpMethod::Put, ResourceType::Item);

        assert!(!decision.allowed);
        assert!(decision.required.is_empty());
        assert!(decision.missing.is_empty());
        assert_eq!(decision.reason, "PUT is not supported on item resources");

        let decision = ReadOnly.explain(HttpMethod::Get, ResourceType::Collection);
        assert!(decision.allowed);
        assert_eq!(decision.reason, "GET is supported on collection resources");
    }

    #[test]
    fn unknown_resource_type_name_is_an_error() {
        let exposure = ExposureFlags::all();

        assert_eq!(
            methods_for_name("association", &exposure),
            Err(MappingError::InvalidResourceType("association".to_string()))
        );
        assert!(supports_name(HttpMethod::Options, "", &exposure).is_err());
    }

    #[test]
    fn known_resource_type_name_resolves() {
        let exposure = flags(false, true, true, false);

        assert_eq!(
            supports_name(HttpMethod::Delete, "item", &exposure),
            Ok(true)
        );
        assert_eq!(
            methods_for_name("collection", &exposure).unwrap(),
            set(&[HttpMethod::Options])
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_flags() -> impl Strategy<Value = ExposureFlags> {
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
                .prop_map(|(save, delete, find_one, find_all)| {
                    flags(save, delete, find_one, find_all)
                })
        }

        fn any_resource_type() -> impl Strategy<Value = ResourceType> {
            prop_oneof![Just(ResourceType::Collection), Just(ResourceType::Item)]
        }

        fn any_method() -> impl Strategy<Value = HttpMethod> {
            proptest::sample::select(HttpMethod::ALL.to_vec())
        }

        proptest! {
            /// Property: OPTIONS is always permitted.
            #[test]
            fn options_always_present(
                exposure in any_flags(),
                resource_type in any_resource_type(),
            ) {
                prop_assert!(methods_for(resource_type, &exposure).contains(&HttpMethod::Options));
            }

            /// Property: collection rules.
            #[test]
            fn collection_rules(exposure in any_flags()) {
                let methods = methods_for(ResourceType::Collection, &exposure);

                prop_assert_eq!(methods.contains(&HttpMethod::Get), exposure.find_all);
                prop_assert_eq!(methods.contains(&HttpMethod::Head), exposure.find_all);
                prop_assert_eq!(methods.contains(&HttpMethod::Post), exposure.save);
                prop_assert!(!methods.contains(&HttpMethod::Put));
                prop_assert!(!methods.contains(&HttpMethod::Patch));
                prop_assert!(!methods.contains(&HttpMethod::Delete));
            }

            /// Property: item rules.
            #[test]
            fn item_rules(exposure in any_flags()) {
                let methods = methods_for(ResourceType::Item, &exposure);

                prop_assert_eq!(
                    methods.contains(&HttpMethod::Delete),
                    exposure.delete && exposure.find_one
                );
                prop_assert_eq!(methods.contains(&HttpMethod::Get), exposure.find_one);
                prop_assert_eq!(methods.contains(&HttpMethod::Head), exposure.find_one);
                prop_assert_eq!(methods.contains(&HttpMethod::Put), exposure.save);
                prop_assert_eq!(methods.contains(&HttpMethod::Patch), exposure.save);
                prop_assert!(!methods.contains(&HttpMethod::Post));
            }

            /// Property: supports is membership in methods_for.
            #[test]
            fn supports_is_membership(
                exposure in any_flags(),
                resource_type in any_resource_type(),
                method in any_method(),
            ) {
                prop_assert_eq!(
                    supports(method, resource_type, &exposure),
                    methods_for(resource_type, &exposure).contains(&method)
                );
            }
        }
    }
}
