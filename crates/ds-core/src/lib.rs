//! devshowcase/crates/ds-core/src/lib.rs
//!
//! The central domain models and interface definitions for the
//! showcase catalog.

pub mod error;
pub mod ids;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use ids::*;
pub use models::*;
pub use traits::*;
