use std::cell::RefCell;

use common::ClientConfig;
use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "fintrack_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base URL of the REST backend (e.g. "http://localhost:8080/api")
    pub api_base_url: String,

    /// ISO currency used for every amount
    pub currency: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            api_base_url: client.api_base_url,
            currency: client.currency,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Layers runtime configuration served by the host over the defaults.
    pub fn apply_client_config(&mut self, config: &ClientConfig) {
        self.api_base_url = config.api_base_url.clone();
        self.currency = config.currency.clone();
    }

    /// Applies `fintrack_*` overrides; `lookup` receives the unprefixed key.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("api_base_url") {
            self.api_base_url = url;
        }
        if let Some(currency) = lookup("currency") {
            self.currency = currency.to_uppercase();
        }
        if let Some(level) = lookup("log_level") {
            match parse_level(&level) {
                Some(level) => self.log_level = level,
                None => log::warn!("Ignoring unknown log level override: {}", level),
            }
        }
        if let Some(duration) = lookup("toast_duration_ms") {
            if let Ok(duration) = duration.parse::<u32>() {
                self.toast_duration_ms = duration;
            }
        }
    }

    /// Create settings from the window location and localStorage, with
    /// `remote` (the host's `/config.json`) applied beneath localStorage.
    pub fn from_environment(remote: Option<&ClientConfig>) -> Self {
        let mut settings = Self::default();
        if let Some(remote) = remote {
            settings.apply_client_config(remote);
        }

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| {
                storage
                    .get_item(&format!("{STORAGE_PREFIX}{key}"))
                    .ok()
                    .flatten()
                    .filter(|v| !v.is_empty())
            });
        }

        settings
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup, and again once the
/// runtime configuration has been fetched)
pub fn init_settings(remote: Option<&ClientConfig>) {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment(remote);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_overrides_win_over_client_config() {
        let mut settings = AppSettings::default();
        settings.apply_client_config(&ClientConfig {
            api_base_url: "https://finance.example.com/api".to_string(),
            currency: "USD".to_string(),
        });

        let stored: HashMap<&str, &str> = [("currency", "eur"), ("log_level", "trace")].into();
        settings.apply_overrides(|key| stored.get(key).map(|v| v.to_string()));

        assert_eq!(settings.api_base_url, "https://finance.example.com/api");
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.log_level, Level::Trace);
    }

    #[test]
    fn test_unknown_log_level_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| (key == "log_level").then(|| "loud".to_string()));
        assert_eq!(settings.log_level, Level::Info);
    }
}
