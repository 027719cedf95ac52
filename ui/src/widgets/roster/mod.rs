//! The roster admin screen: daily aggregate table, total users, and the
//! searchable users table with per-row delete.

pub mod panel;
pub mod schema;
pub mod state;
