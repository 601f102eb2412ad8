/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed checkout CLI configuration
[POS]:    Configuration layer - gateway and secret setup
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the checkout CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Gateway endpoint override; the production gateway is used when unset
    #[serde(default)]
    pub network_address: Option<String>,
    /// File holding the account secret phrase
    #[serde(default)]
    pub secret_file: Option<PathBuf>,
    /// Channel label attached to delivered outcomes; defaults to "stdout"
    #[serde(default)]
    pub callback: Option<String>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
network_address: "http://localhost:2138"
secret_file: "/home/user/.smartlike-secret"
callback: "widget-1"
"#;
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.network_address.as_deref(),
            Some("http://localhost:2138")
        );
        assert_eq!(
            config.secret_file,
            Some(PathBuf::from("/home/user/.smartlike-secret"))
        );
        assert_eq!(config.callback.as_deref(), Some("widget-1"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.network_address.is_none());
        assert!(config.secret_file.is_none());
        assert!(config.callback.is_none());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut path = std::env::temp_dir();
        path.push(format!("smartlike-checkout-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "network_address: \"http://127.0.0.1:9\"\n").unwrap();

        let config = CliConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.network_address.as_deref(), Some("http://127.0.0.1:9"));
        assert!(config.secret_file.is_none());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(CliConfig::from_file("/definitely/not/here.yaml").is_err());
    }
}
