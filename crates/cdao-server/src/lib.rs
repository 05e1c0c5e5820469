//! CancerDAO site backend
//!
//! Serves the marketing site's subscription and contact-form API plus the
//! demo sales-CRM dashboard reads. All state sits behind a pluggable storage
//! layer: process-local memory or an embedded SQLite database, selected once
//! at startup.

pub mod config;
pub mod handlers;
pub mod server;
pub mod storage;

pub use config::{BackendKind, ServerConfig};
pub use server::{create_router, AppState};
