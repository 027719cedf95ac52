//! Shaping raw API records into flat display rows.

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;
use ustr::Ustr;

use super::types::{RawDailyRecord, RawName, RawUserRecord, StructuredName};

/// Row mapping failure. A structured name that is present but malformed
/// fails the whole batch rather than producing a half-mapped row set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("user {uuid}: malformed structured name: {reason}")]
    MalformedName { uuid: String, reason: String },
}

/// Display name, decomposed when the backend sent a structured one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayName {
    Split { first: String, last: String },
    Full(String),
}

impl DisplayName {
    pub fn first(&self) -> &str {
        match self {
            Self::Split { first, .. } => first,
            Self::Full(name) => name,
        }
    }

    pub fn last(&self) -> &str {
        match self {
            Self::Split { last, .. } => last,
            Self::Full(_) => "",
        }
    }
}

/// One flat display row of the users table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// 1-based position within the fetched batch. Presentation-only: it is
    /// recomputed on every fetch and is not an identifier.
    pub ordinal: usize,
    pub id: Ustr,
    pub name: DisplayName,
    pub gender: String,
    pub age: u32,
    pub location: String,
}

/// Map a fetched batch into display rows.
pub fn map_users(batch: &[RawUserRecord]) -> Result<Vec<UserRow>, MapError> {
    batch
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            Ok(UserRow {
                ordinal: index + 1,
                id: Ustr::from(&raw.uuid),
                name: display_name(&raw.name, &raw.uuid)?,
                gender: raw.gender.clone(),
                age: raw.age,
                location: raw.location.clone(),
            })
        })
        .collect()
}

fn display_name(raw: &RawName, uuid: &str) -> Result<DisplayName, MapError> {
    match raw {
        RawName::Structured(name) => Ok(DisplayName::Split {
            first: name.first.clone(),
            last: name.last.clone(),
        }),
        // The older backend revision embeds the structured name as a JSON
        // string; a string not shaped like an object is a plain name.
        RawName::Text(text) if text.trim_start().starts_with('{') => {
            match serde_json::from_str::<StructuredName>(text) {
                Ok(name) => Ok(DisplayName::Split {
                    first: name.first,
                    last: name.last,
                }),
                Err(err) => Err(MapError::MalformedName {
                    uuid: uuid.to_owned(),
                    reason: err.to_string(),
                }),
            }
        }
        RawName::Text(text) => Ok(DisplayName::Full(text.clone())),
    }
}

/// The daily aggregate, shaped for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub id: String,
    pub date: String,
    pub total_user: Option<u64>,
    pub male_count: u64,
    pub female_count: u64,
    pub male_avg_age: f64,
    pub female_avg_age: f64,
}

pub fn map_daily_record(raw: &RawDailyRecord) -> DailyRow {
    DailyRow {
        id: raw.uuid.clone().unwrap_or_default(),
        date: format_record_date(&raw.date),
        total_user: raw.total_user,
        male_count: raw.male_count,
        female_count: raw.female_count,
        male_avg_age: raw.male_avg_age,
        female_avg_age: raw.female_avg_age,
    }
}

/// Timestamps are converted to the local timezone; plain dates pass through
/// unchanged. Anything else is displayed raw instead of failing the fetch.
pub fn format_record_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
    }
    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_owned();
    }
    log::warn!("daily record date `{raw}` is neither RFC3339 nor YYYY-MM-DD");
    raw.to_owned()
}
