//! Demo sales dashboard types
//!
//! Read-only records backing the CRM dashboard demo. They have no create
//! path; both storage backends serve them from the same static seed.

use serde::{Deserialize, Serialize};

/// Sales pipeline deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: i64,
    pub client: String,
    pub title: String,
    pub amount: i64,
    pub stage: String,
    pub owner: String,
}

/// Headline dashboard metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: i64,
    pub label: String,
    pub value: String,
    pub change: String,
}

/// Activity feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub actor: String,
    pub action: String,
    pub occurred: String,
}
