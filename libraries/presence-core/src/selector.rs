//! User selector controller
//!
//! Drives the user selection control through its one-shot lifecycle:
//!
//! ```text
//! Loading ──fetch ok──▶ Populated { selected: None } ──select──▶ Populated { selected: Some(id) }
//!    │
//!    └────fetch err───▶ Failed { message }
//! ```
//!
//! The avatar URL of each user is kept in an in-memory [`UserDirectory`]
//! rather than on the rendered entries, so the controller can be driven
//! without a DOM.

use crate::error::{PresenceError, Result};
use crate::traits::{SelectorView, UserSource};
use crate::types::{OptionEntry, RawUserRecord, UserRecord};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Lifecycle state of the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    /// Waiting for the user list
    Loading,
    /// Options rendered; `selected` is the current choice
    Populated { selected: Option<i64> },
    /// The user list could not be loaded
    Failed { message: String },
}

/// Outcome of a population pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopulateSummary {
    /// Entries appended to the control
    pub rendered: usize,
    /// Malformed records left out
    pub skipped: usize,
}

/// What the avatar image shows after a selection change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarDisplay {
    /// Image visible with this source
    Shown(String),
    /// Image hidden
    Hidden,
}

/// Users received from the server, keyed by id
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    records: HashMap<i64, UserRecord>,
}

impl UserDirectory {
    /// Insert a record. The first record for an id wins; returns `false`
    /// when the id was already present.
    pub fn insert(&mut self, record: UserRecord) -> bool {
        if self.records.contains_key(&record.user_id) {
            return false;
        }
        self.records.insert(record.user_id, record);
        true
    }

    /// Look up a user by id
    pub fn get(&self, user_id: i64) -> Option<&UserRecord> {
        self.records.get(&user_id)
    }

    /// Number of distinct users
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no users were received
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Controller for the user selection control and avatar image
pub struct SelectorController<V: SelectorView> {
    view: V,
    state: SelectorState,
    directory: UserDirectory,
}

impl<V: SelectorView> SelectorController<V> {
    /// Create a controller in the `Loading` state.
    ///
    /// The loading indicator is shown and the control hidden until
    /// [`initialize`](Self::initialize) completes.
    pub fn new(mut view: V) -> Self {
        view.show_loading();
        view.hide_selector();

        Self {
            view,
            state: SelectorState::Loading,
            directory: UserDirectory::default(),
        }
    }

    /// Fetch the user list once and populate the control.
    ///
    /// On failure the error indicator is shown, the loading indicator hidden
    /// and the control stays hidden. The list is never re-fetched.
    pub async fn initialize(&mut self, source: &dyn UserSource) -> Result<PopulateSummary> {
        if self.state != SelectorState::Loading {
            return Err(PresenceError::AlreadyInitialized);
        }

        debug!("Fetching user list");
        let result = source.fetch_users().await;
        self.complete(result)
    }

    /// Apply the outcome of the user list fetch.
    ///
    /// Hosts that perform the fetch themselves (e.g. the browser binding)
    /// call this directly instead of [`initialize`](Self::initialize).
    pub fn complete(&mut self, result: Result<Vec<RawUserRecord>>) -> Result<PopulateSummary> {
        if self.state != SelectorState::Loading {
            return Err(PresenceError::AlreadyInitialized);
        }

        match result {
            Ok(records) => Ok(self.populate(records)),
            Err(e) => {
                let message = e.to_string();
                error!(error = %message, "Failed to load user list");

                self.view.show_error(&message);
                self.view.hide_loading();
                self.state = SelectorState::Failed { message };

                Err(e)
            }
        }
    }

    fn populate(&mut self, records: Vec<RawUserRecord>) -> PopulateSummary {
        let mut summary = PopulateSummary::default();

        for (index, raw) in records.into_iter().enumerate() {
            let record = match raw.validate(index) {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "Skipping user record");
                    summary.skipped += 1;
                    continue;
                }
            };

            self.view.append_option(&OptionEntry::from(&record));
            summary.rendered += 1;

            let user_id = record.user_id;
            if !self.directory.insert(record) {
                warn!(user_id, "Duplicate user id, keeping first record");
            }
        }

        self.view.show_selector();
        self.view.hide_loading();
        self.state = SelectorState::Populated { selected: None };

        info!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            "User selector populated"
        );

        summary
    }

    /// React to the user choosing `user_id` in the control.
    ///
    /// The avatar is hidden before its source changes and shown again only
    /// when the selected user has a non-empty avatar URL.
    pub fn select(&mut self, user_id: i64) -> Result<AvatarDisplay> {
        let SelectorState::Populated { selected } = &mut self.state else {
            return Err(PresenceError::NotReady);
        };

        self.view.hide_avatar();

        let Some(record) = self.directory.get(user_id) else {
            *selected = None;
            return Err(PresenceError::UnknownUser(user_id));
        };
        *selected = Some(user_id);

        match record.avatar_url() {
            Some(url) => {
                debug!(user_id, url = %url, "Showing avatar");
                self.view.set_avatar_source(url);
                self.view.show_avatar();
                Ok(AvatarDisplay::Shown(url.to_string()))
            }
            None => {
                debug!(user_id, "User has no avatar");
                Ok(AvatarDisplay::Hidden)
            }
        }
    }

    /// React to a change event carrying the control's raw option value.
    ///
    /// A value that is not a user id is handled like an unknown user: the
    /// avatar is hidden and the selection cleared.
    pub fn select_value(&mut self, value: &str) -> Result<AvatarDisplay> {
        match value.trim().parse::<i64>() {
            Ok(user_id) => self.select(user_id),
            Err(_) => {
                let SelectorState::Populated { selected } = &mut self.state else {
                    return Err(PresenceError::NotReady);
                };
                *selected = None;
                self.view.hide_avatar();
                Err(PresenceError::InvalidSelection(value.to_string()))
            }
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Currently selected user id
    pub fn selected(&self) -> Option<i64> {
        match self.state {
            SelectorState::Populated { selected } => selected,
            _ => None,
        }
    }

    /// Users received from the server
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Borrow the view
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consume the controller and return its view
    pub fn into_view(self) -> V {
        self.view
    }
}
