//! Presence API Client
//!
//! HTTP client library for the presence analyzer API.
//!
//! # Features
//!
//! - **User list**: the records behind the dashboard's user selector
//! - **Chart data**: mean time, total presence and start-end rows per user
//! - **Selector source**: implements [`presence_core::UserSource`] so the
//!   client can drive a [`presence_core::SelectorController`] directly
//!
//! # Example
//!
//! ```ignore
//! use presence_client::{ClientConfig, PresenceClient};
//! use presence_core::{start_end_rows, SelectorController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PresenceClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     // Populate a selector
//!     let mut selector = SelectorController::new(my_view);
//!     selector.initialize(&client).await?;
//!
//!     // Fetch timeline rows for one user
//!     let rows = start_end_rows(&client.presence_start_end(10).await?);
//!     println!("{} weekdays", rows.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::PresenceClient;
pub use error::{ClientError, Result};
pub use types::{ChartEndpoint, ClientConfig, API_PREFIX, DEFAULT_USERS_PATH};
