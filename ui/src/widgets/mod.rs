mod env_version;
pub mod roster;
pub mod table;

pub use env_version::env_version;
pub use roster::panel::roster_panel;
pub use roster::state::RosterPanelState;
