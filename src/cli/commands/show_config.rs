use anyhow::Result;

use crate::config::HostConfig;

/// Pretty JSON of the effective configuration.
pub fn show_config(config: &HostConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_config_lists_every_key() {
        let json: serde_json::Value =
            serde_json::from_str(&show_config(&HostConfig::default()).unwrap()).unwrap();
        assert_eq!(json["bind_address"], "0.0.0.0:3000");
        assert_eq!(json["dist_dir"], "dist");
        assert_eq!(json["api_base_url"], "http://localhost:8080/api");
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["request_timeout_secs"], 30);
    }
}
