use std::any::Any;
use std::env::vars;

use ffgz_states::{SnapshotClone, State, state_assign_impl};
use serde::Deserialize;
use ustr::Ustr;

/// Address the FFGZ backend binds by default.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Origin of the backend, without the `/api` suffix. Empty means same-origin.
    pub api_base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    ffgz_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `FFGZ_API_BASE_URL`, falling back to [`BusinessConfig::default`].
    pub fn from_env() -> Self {
        match serde_env::from_iter(vars()) {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                log::warn!("Invalid environment configuration, using defaults: {err}");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.ffgz_api_base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim().trim_end_matches('/')),
            _ => Self::default(),
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_API_BASE_URL.to_owned()
            },
        }
    }
}

impl SnapshotClone for BusinessConfig {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn default_points_at_local_backend() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.api_url(), Ustr::from("http://127.0.0.1:5000/api"));
    }

    #[test]
    fn empty_base_url_is_same_origin() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }

    #[test]
    fn env_override_drops_trailing_slash() {
        let raw: RawConfig = from_iter(vec![("FFGZ_API_BASE_URL", "https://ffgz.example.com/")])
            .expect("RawConfig should deserialize");
        let config = BusinessConfig::from_raw(raw);
        assert_eq!(config.api_url(), Ustr::from("https://ffgz.example.com/api"));
    }

    #[test]
    fn blank_env_value_falls_back_to_default() {
        let raw: RawConfig =
            from_iter(vec![("FFGZ_API_BASE_URL", "  ")]).expect("RawConfig should deserialize");
        assert_eq!(BusinessConfig::from_raw(raw), BusinessConfig::default());
    }
}
