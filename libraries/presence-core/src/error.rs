/// Core error types for the presence dashboard
use thiserror::Error;

/// Result type alias using `PresenceError`
pub type Result<T> = std::result::Result<T, PresenceError>;

/// Core error type for the presence dashboard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    /// The user list could not be fetched or decoded
    #[error("Failed to load user list: {0}")]
    Fetch(String),

    /// A user record is missing a required field
    #[error("Malformed user record at index {index}: {reason}")]
    MalformedRecord {
        /// Position of the record in the server response
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// The selector has already been initialized for this page load
    #[error("Selector already initialized")]
    AlreadyInitialized,

    /// The selector has not been populated yet
    #[error("Selector is not populated")]
    NotReady,

    /// No user with this id was received
    #[error("Unknown user: {0}")]
    UnknownUser(i64),

    /// The control reported a value that is not a user id
    #[error("Invalid selection: {0:?}")]
    InvalidSelection(String),
}

impl PresenceError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a malformed record error
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}
