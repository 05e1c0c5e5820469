//! Pure data types for the CancerDAO site backend
//!
//! This crate contains only serializable data types with no async runtime
//! dependencies, shared between the storage layer and the HTTP surface.
//! Field names serialize as camelCase to match the site frontend.

pub mod contact;
pub mod dashboard;
pub mod subscriber;

pub use contact::*;
pub use dashboard::*;
pub use subscriber::*;
