//! Core contracts for the CancerDAO site backend
//!
//! The error taxonomy and the storage port traits that every persistence
//! backend implements. Concrete backends live in the server crate.

pub mod error;
pub mod ports;

pub use error::{CdaoError, Result};
pub use ports::storage::{ContactMessageStore, DashboardStore, Storage, SubscriberStore};
