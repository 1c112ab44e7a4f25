// SPDX-License-Identifier: MIT
//! Analytics configuration (`analytics.toml`, optional).
//!
//! Every field has a default so the subsystem works with no config file at
//! all; a malformed file is logged and ignored rather than failing startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::recorder::AmbientContext;

const DEFAULT_DATA_DIR: &str = ".skillsense";
const DEFAULT_PAGE_URL: &str = "app://skillsense";

/// Analytics subsystem configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Directory holding the persisted event document. Default: `.skillsense`.
    pub data_dir: PathBuf,
    /// Ambient page URL stamped into every event. The host updates this per
    /// screen; the default marks events recorded before any screen is known.
    pub page_url: String,
    /// Ambient client agent string stamped into every event.
    pub user_agent: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_url: DEFAULT_PAGE_URL.to_string(),
            user_agent: format!(
                "skillsense/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }
}

impl AnalyticsConfig {
    /// Load from a TOML file. A missing file yields defaults; a malformed
    /// file is logged and also yields defaults.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&contents) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(path = %path.display(), err = %e, "failed to parse analytics config — using defaults");
                Self::default()
            }
        }
    }

    /// Ambient fields derived from this configuration.
    pub fn ambient(&self) -> AmbientContext {
        AmbientContext {
            url: self.page_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
