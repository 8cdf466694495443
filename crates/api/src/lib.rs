//! HTTP adapter: turns method policies into 405 responses and `Allow` headers.
//!
//! Routing stays with the host application; this crate only wraps the routes
//! it is handed.

pub mod allow;
pub mod catalog_file;
pub mod errors;
pub mod middleware;

pub use allow::{allow_header_value, policy_method};
pub use catalog_file::{CATALOG_ENV, load_catalog, resolve_catalog_path};
pub use middleware::{MethodPolicy, guarded, method_guard};
