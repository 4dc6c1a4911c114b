//! service-core: shared infrastructure for bfhl services.
pub mod config;
pub mod error;
pub mod observability;

pub use serde;
pub use tracing;
