use std::any::Any;

use roster_states::{State, state_assign_impl};
use serde::Deserialize;
use ustr::Ustr;

/// Runtime configuration for the app, registered as a state so commands can
/// snapshot it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

/// The environment surface read at startup.
#[derive(Debug, Deserialize)]
struct RosterEnv {
    #[serde(default)]
    roster_api_base_url: Option<String>,
}

impl AppConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// The `/api` root every endpoint hangs off. An empty base means
    /// same-origin (web builds).
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            return Self::new(String::new());
        }
        let configured = serde_env::from_env::<RosterEnv>()
            .map_err(|err| log::warn!("could not read environment config: {err}"))
            .ok()
            .and_then(|env| env.roster_api_base_url);
        Self::new(configured.unwrap_or_else(|| "http://127.0.0.1:8000".to_owned()))
    }
}

impl State for AppConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_api() {
        let config = AppConfig::new("http://127.0.0.1:8000".to_owned());
        assert_eq!(config.api_url(), Ustr::from("http://127.0.0.1:8000/api"));
    }

    #[test]
    fn empty_base_url_means_same_origin() {
        let config = AppConfig::new(String::new());
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }
}
