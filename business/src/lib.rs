//! Business layer of the Roster admin app: configuration, the HTTP client,
//! the backend wire contract, row shaping, and the controller state
//! machines the UI renders from.

pub mod config;
pub mod http;
pub mod roster;

pub use roster_utils::version_info;

pub use config::AppConfig;
pub use roster::FetchStatus;
pub use roster::api::{ApiError, ApiResult};
pub use roster::delete_compute::{
    DeleteUserCommand, DeleteUserCompute, DeleteUserInput, DeleteUserState,
};
pub use roster::list_compute::{RefreshUsersCommand, UsersListCompute, UsersQueryInput};
pub use roster::record_compute::{DailyRecordCompute, RefreshDailyRecordCommand};
pub use roster::rows::{DailyRow, DisplayName, MapError, UserRow, map_daily_record, map_users};
pub use roster::types::{
    DailyRecordResponse, ListMeta, ListUsersResponse, RawDailyRecord, RawName, RawUserRecord,
    StructuredName,
};
