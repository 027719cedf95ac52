//! REST client for the roster backend.
//!
//! Thin async functions over [`Client`], used by commands. They perform IO
//! only; mapping results into state updates happens at the call sites.

use thiserror::Error;

use super::types::{DailyRecordResponse, ListUsersResponse};
use crate::http::Client;

/// Failure taxonomy for backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connectivity, DNS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("API returned status: {0}")]
    Status(u16),
    /// The response body was not in the expected shape.
    #[error("failed to parse {what}: {reason}")]
    Parse { what: &'static str, reason: String },
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

/// GET `{api_base_url}/users[?search=term]`
///
/// The `search` parameter is attached only when a query exists; `Some("")`
/// is a valid empty query and still produces the parameter.
pub async fn list_users(api_base_url: &str, search: Option<&str>) -> ApiResult<ListUsersResponse> {
    let mut url = format!("{api_base_url}/users");
    if let Some(term) = search {
        url.push_str("?search=");
        url.push_str(&urlencoding::encode(term));
    }

    let response = Client::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    response.json().map_err(|err| ApiError::Parse {
        what: "ListUsersResponse",
        reason: err.to_string(),
    })
}

/// GET `{api_base_url}/daily-record`
pub async fn daily_record(api_base_url: &str) -> ApiResult<DailyRecordResponse> {
    let url = format!("{api_base_url}/daily-record");

    let response = Client::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    response.json().map_err(|err| ApiError::Parse {
        what: "DailyRecordResponse",
        reason: err.to_string(),
    })
}

/// DELETE `{api_base_url}/users/{uuid}`
///
/// Any 2xx status counts as success; the body is ignored.
pub async fn delete_user(api_base_url: &str, uuid: &str) -> ApiResult<()> {
    let url = format!("{api_base_url}/users/{uuid}");

    let response = Client::delete(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    Ok(())
}
