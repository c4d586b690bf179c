//! Types for presence API configuration.

/// Default path of the user list endpoint, relative to the base URL
pub const DEFAULT_USERS_PATH: &str = "api/v1/users";

/// Prefix of the per-user chart data endpoints, relative to the base URL
pub const API_PREFIX: &str = "api/v1";

/// Configuration for connecting to the presence API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://intranet.example.com")
    pub url: String,
    /// Path of the user list endpoint, as supplied by the page. Relative
    /// paths keep the base URL's path prefix; a leading `/` resolves
    /// against the host root.
    pub users_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config with the default endpoint paths.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            users_path: DEFAULT_USERS_PATH.to_string(),
            timeout_secs: 30,
        }
    }

    /// Override the user list endpoint path.
    pub fn with_users_path(mut self, path: impl Into<String>) -> Self {
        self.users_path = path.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Per-user chart data endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEndpoint {
    /// Mean presence time grouped by weekday
    MeanTimeWeekday,
    /// Total presence time grouped by weekday
    PresenceWeekday,
    /// Mean start and end of presence grouped by weekday
    PresenceStartEnd,
}

impl ChartEndpoint {
    /// Path segment of the endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartEndpoint::MeanTimeWeekday => "mean_time_weekday",
            ChartEndpoint::PresenceWeekday => "presence_weekday",
            ChartEndpoint::PresenceStartEnd => "presence_start_end",
        }
    }

    /// Path for one user, relative to the base URL
    pub fn path(&self, user_id: i64) -> String {
        format!("{}/{}/{}", API_PREFIX, self.as_str(), user_id)
    }
}
