//! Shared utilities for the Roster workspace.

pub mod version_info;
