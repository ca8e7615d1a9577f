//! Native-only UI settings read from the environment.

use std::env::vars;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiConfig {
    /// Fallback font for CJK glyphs.
    pub font_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    ffgz_font_path: Option<String>,
}

impl UiConfig {
    pub fn from_env() -> Self {
        match serde_env::from_iter(vars()) {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                log::warn!("Invalid UI environment configuration: {err}");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        Self {
            font_path: raw
                .ffgz_font_path
                .map(|path| path.trim().to_owned())
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}
