/// Traits at the seams between the dashboard core and its host
use crate::chart::ChartLoadRequest;
use crate::error::Result;
use crate::types::{OptionEntry, RawUserRecord};
use async_trait::async_trait;

/// Source of the user list
///
/// Implemented by the HTTP client; tests provide canned lists.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the complete user list, in server order
    ///
    /// # Errors
    /// Returns `PresenceError::Fetch` on network or decoding failure
    async fn fetch_users(&self) -> Result<Vec<RawUserRecord>>;
}

/// The visible surface of the user selector
///
/// Each method is one synchronous mutation of the page: a loading indicator,
/// a selection control, an avatar image and an error indicator.
pub trait SelectorView {
    /// Show the loading indicator
    fn show_loading(&mut self);

    /// Hide the loading indicator
    fn hide_loading(&mut self);

    /// Hide the selection control
    fn hide_selector(&mut self);

    /// Reveal the selection control
    fn show_selector(&mut self);

    /// Append one entry to the end of the selection control
    fn append_option(&mut self, entry: &OptionEntry);

    /// Hide the avatar image
    fn hide_avatar(&mut self);

    /// Point the avatar image at a new URL
    fn set_avatar_source(&mut self, url: &str);

    /// Show the avatar image
    fn show_avatar(&mut self);

    /// Show a visible error indicator
    fn show_error(&mut self, message: &str);
}

/// Bootstraps the chart-rendering library
pub trait ChartLoader {
    /// Request the library packages. Fire-and-forget.
    fn load(&self, request: &ChartLoadRequest);
}
