/// Dashboard configuration
use crate::error::{DashboardError, Result};
use presence_client::{ClientConfig, DEFAULT_USERS_PATH};
use presence_core::ChartLoadRequest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_charts")]
    pub charts: ChartSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User list endpoint, relative to `base_url` or absolute
    #[serde(default = "default_users_path")]
    pub users_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartSettings {
    #[serde(default = "default_language")]
    pub language: String,
}

impl DashboardConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // An explicit path must exist; the default file is optional
        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. PRESENCE_API__BASE_URL
        settings = settings.add_source(
            config::Environment::with_prefix("PRESENCE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(DashboardError::Config(
                "API base URL is required (set PRESENCE_API__BASE_URL)".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DashboardError::Config(format!(
                "API base URL must start with http:// or https://, got {:?}",
                url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(DashboardError::Config(
                "API timeout must be at least one second".to_string(),
            ));
        }

        if self.charts.language.trim().is_empty() {
            return Err(DashboardError::Config(
                "Chart language cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings for the presence API
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone())
            .with_users_path(self.api.users_path.clone())
            .with_timeout_secs(self.api.timeout_secs)
    }

    /// Chart library bootstrap request
    pub fn chart_request(&self) -> ChartLoadRequest {
        ChartLoadRequest::default().with_language(self.charts.language.clone())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        users_path: default_users_path(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_users_path() -> String {
    DEFAULT_USERS_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_charts() -> ChartSettings {
    ChartSettings {
        language: default_language(),
    }
}

fn default_language() -> String {
    presence_core::chart::DEFAULT_LANGUAGE.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            charts: default_charts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.users_path, "api/v1/users");
        assert_eq!(config.charts.language, "pl");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://intranet.example.com"
users_path = "/presence/api/v1/users"

[charts]
language = "en"
"#
        )
        .unwrap();

        let config = DashboardConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.api.base_url, "https://intranet.example.com");
        assert_eq!(config.api.users_path, "/presence/api/v1/users");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.charts.language, "en");
        assert_eq!(config.chart_request().language, "en");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = DashboardConfig::load(Some(Path::new("/nonexistent/dashboard.toml")));
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DashboardConfig::default();
        config.api.base_url = "intranet".into();
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.api.base_url = "  ".into();
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.charts.language = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_config() {
        let mut config = DashboardConfig::default();
        config.api.users_path = "/users".into();
        config.api.timeout_secs = 5;

        let client = config.client_config();
        assert_eq!(client.url, "http://localhost:5000");
        assert_eq!(client.users_path, "/users");
        assert_eq!(client.timeout_secs, 5);
    }
}
