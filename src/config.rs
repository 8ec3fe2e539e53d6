//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static settings are resolved at compile time through `option_env!` so the
//! same WASM bundle can be built against different API mounts. Provider app
//! ids are runtime data fetched from the backend (`ServiceIds`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default mount point of the backend JSON API.
pub const DEFAULT_API_BASE: &str = "/j";

/// Script element id used for the Facebook JS SDK.
pub const FACEBOOK_SDK_ID: &str = "facebook-jssdk";

/// Facebook JS SDK source (protocol-relative).
pub const FACEBOOK_SDK_SRC: &str = "//connect.facebook.net/en_US/all.js";

/// Build-time client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Mount point of the JSON API, without trailing slash.
    pub api_base: String,
    /// Minimum level forwarded to the browser console.
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Resolve settings from `GONAWIN_API_BASE` and `GONAWIN_LOG_LEVEL` as seen
    /// by the compiler, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GONAWIN_API_BASE"), option_env!("GONAWIN_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .map_or(defaults.api_base, |base| base.trim_end_matches('/').to_owned());
        let log_level = log_level
            .and_then(|level| level.trim().parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);
        Self { api_base, log_level }
    }
}
