//! `restmap-mapping` — decides which HTTP methods a repository-backed resource
//! accepts.
//!
//! This crate is intentionally decoupled from HTTP frameworks and from the
//! repository metadata scanner: it consumes precomputed exposure information and
//! answers pure policy questions.

pub mod catalog;
pub mod crud_methods;
pub mod explain;
pub mod exposure;
pub mod rules;
pub mod supported;

pub use catalog::RepositoryCatalog;
pub use crud_methods::{CrudMethod, CrudMethods, CrudOperation, RestResource};
pub use explain::{MethodDecision, explain};
pub use exposure::{ExposureAwareCrudMethods, ExposureFlags};
pub use rules::{RULES, Rule, required_operations};
pub use supported::{
    CrudMethodsSupportedHttpMethods, SupportedHttpMethods, methods_for, methods_for_name,
    supports, supports_name,
};
