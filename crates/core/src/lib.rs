//! `restmap-core` — shared vocabulary for the REST exposure policy.
//!
//! This crate contains **pure** types only (no HTTP framework, no IO).

pub mod error;
pub mod http_method;
pub mod resource_type;

pub use error::{MappingError, MappingResult};
pub use http_method::HttpMethod;
pub use resource_type::ResourceType;
