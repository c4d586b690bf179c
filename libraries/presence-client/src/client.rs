//! Main presence API client.

use crate::error::{ClientError, Result};
use crate::types::{ChartEndpoint, ClientConfig};
use async_trait::async_trait;
use presence_core::{
    MeanTimeEntry, RawUserRecord, StartEndEntry, UserSource, WeekdayPresenceItem,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the presence analyzer API.
///
/// Endpoint paths are resolved against the base URL the way a browser
/// resolves a link. The base is kept with a trailing slash so relative
/// endpoint paths stay under any path prefix it carries.
///
/// # Example
///
/// ```ignore
/// use presence_client::{ClientConfig, PresenceClient};
///
/// let client = PresenceClient::new(ClientConfig::new("http://localhost:5000"))?;
/// let users = client.fetch_users().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct PresenceClient {
    http: Client,
    base_url: Url,
    users_url: Url,
}

impl PresenceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(&format!("{}/", url))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let users_url = base_url
            .join(&config.users_path)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.users_path, e)))?;

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("PresenceDashboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            users_url,
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Get the resolved user list URL.
    pub fn users_url(&self) -> &str {
        self.users_url.as_str()
    }

    /// Fetch the user list in server order.
    pub async fn fetch_users(&self) -> Result<Vec<RawUserRecord>> {
        let users: Vec<RawUserRecord> = self.get_json(self.users_url.clone(), "users").await?;
        debug!(users = users.len(), "Fetched user list");
        Ok(users)
    }

    /// Mean presence time per weekday for one user.
    pub async fn mean_time_weekday(&self, user_id: i64) -> Result<Vec<MeanTimeEntry>> {
        self.get_chart(ChartEndpoint::MeanTimeWeekday, user_id).await
    }

    /// Total presence time per weekday for one user, header row included.
    pub async fn presence_weekday(&self, user_id: i64) -> Result<Vec<WeekdayPresenceItem>> {
        self.get_chart(ChartEndpoint::PresenceWeekday, user_id).await
    }

    /// Mean start and end of presence per weekday for one user.
    pub async fn presence_start_end(&self, user_id: i64) -> Result<Vec<StartEndEntry>> {
        self.get_chart(ChartEndpoint::PresenceStartEnd, user_id).await
    }

    async fn get_chart<T: DeserializeOwned>(
        &self,
        endpoint: ChartEndpoint,
        user_id: i64,
    ) -> Result<Vec<T>> {
        let url = self
            .base_url
            .join(&endpoint.path(user_id))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let rows: Vec<T> = self.get_json(url, endpoint.as_str()).await?;
        debug!(
            endpoint = endpoint.as_str(),
            user_id,
            rows = rows.len(),
            "Fetched chart data"
        );
        Ok(rows)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
        debug!(url = %url, "Requesting {}", what);

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl UserSource for PresenceClient {
    async fn fetch_users(&self) -> presence_core::Result<Vec<RawUserRecord>> {
        Ok(PresenceClient::fetch_users(self).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(PresenceClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(PresenceClient::new(ClientConfig::new("http://localhost:5000")).is_ok());

        // Invalid URLs
        assert!(PresenceClient::new(ClientConfig::new("")).is_err());
        assert!(PresenceClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(PresenceClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            PresenceClient::new(ClientConfig::new("https://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.url(), "https://example.com");
        assert_eq!(client.users_url(), "https://example.com/api/v1/users");
    }

    #[test]
    fn test_base_path_prefix_kept() {
        for base in ["https://example.com/presence", "https://example.com/presence/"] {
            let client = PresenceClient::new(ClientConfig::new(base)).unwrap();
            assert_eq!(client.url(), "https://example.com/presence");
            assert_eq!(
                client.users_url(),
                "https://example.com/presence/api/v1/users"
            );
        }
    }

    #[test]
    fn test_users_path_override() {
        let relative = PresenceClient::new(
            ClientConfig::new("https://example.com").with_users_path("/presence/api/v1/users"),
        )
        .unwrap();
        assert_eq!(
            relative.users_url(),
            "https://example.com/presence/api/v1/users"
        );

        let absolute = PresenceClient::new(
            ClientConfig::new("https://example.com").with_users_path("https://other.example.com/users"),
        )
        .unwrap();
        assert_eq!(absolute.users_url(), "https://other.example.com/users");
    }
}
