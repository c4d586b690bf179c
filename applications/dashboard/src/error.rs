/// Dashboard error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Presence API error: {0}")]
    Client(#[from] presence_client::ClientError),

    #[error(transparent)]
    Presence(#[from] presence_core::PresenceError),
}
