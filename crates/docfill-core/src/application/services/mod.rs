//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "fill every placeholder under a directory".

pub mod placeholder_service;

pub use placeholder_service::{PlaceholderService, RewriteOptions};
