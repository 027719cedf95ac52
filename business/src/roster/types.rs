//! Wire types for the backend REST contract.
//!
//! Two backend revisions are in the wild and both are accepted:
//! - the older one embeds the structured name as a JSON string inside the
//!   `name` field and reports no `meta`, so the total falls back to the
//!   batch length;
//! - the newer one sends `name` as a structured object (or a plain display
//!   string) and carries `meta.total`.

use serde::{Deserialize, Serialize};

/// `GET /api/users` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub data: Vec<RawUserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

impl ListUsersResponse {
    /// Server-reported total when present, else the batch length.
    pub fn total(&self) -> usize {
        self.meta
            .as_ref()
            .map(|meta| meta.total as usize)
            .unwrap_or(self.data.len())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListMeta {
    pub total: u64,
}

/// One user record as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUserRecord {
    pub uuid: String,
    pub name: RawName,
    pub gender: String,
    pub age: u32,
    pub location: String,
}

/// The `name` field across backend revisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawName {
    /// Structured object: `{"first": ..., "last": ...}`.
    Structured(StructuredName),
    /// A plain display string, or (older revision) a JSON object embedded
    /// in a string.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredName {
    pub first: String,
    pub last: String,
}

/// `GET /api/daily-record` response envelope. A single object, not a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecordResponse {
    pub data: RawDailyRecord,
}

/// The server-computed daily summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDailyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_user: Option<u64>,
    pub male_count: u64,
    pub female_count: u64,
    pub male_avg_age: f64,
    pub female_avg_age: f64,
}
