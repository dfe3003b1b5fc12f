//! Application Configuration
//!
//! API base URL and acting user, read from localStorage at startup.
//! `FORM_API_BASE` at build time overrides the default base URL.

use serde::{Deserialize, Serialize};

/// localStorage key holding the JSON config
pub const STORAGE_KEY: &str = "form-builder.config";

const DEFAULT_USER_ID: &str = "1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Prefix for every API path, without trailing slash
    pub api_base_url: String,
    /// Sent as `userId` when creating forms and listing published ones
    pub user_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FORM_API_BASE").unwrap_or_default().to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a stored config, falling back to defaults for missing keys
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load from localStorage. Missing or unreadable config yields defaults.
    pub fn load() -> Self {
        let Some(raw) = read_storage() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded config: base={:?}, user={}", config.api_base_url, config.user_id);
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] Ignoring invalid {}: {}", STORAGE_KEY, e);
                Self::default()
            }
        }
    }

    /// Full URL for an API path such as `/api/form/create`
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

fn read_storage() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}
