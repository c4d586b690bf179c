//! Presence Dashboard Core
//!
//! Platform-agnostic client-side logic for the presence dashboard.
//!
//! This crate provides:
//! - **Interval conversion**: seconds since midnight to calendar time for
//!   chart placement
//! - **User selector**: the load-once, populate, select-and-swap-avatar
//!   state machine behind the user dropdown
//! - **Chart bootstrap**: the package and locale request for the chart library
//! - **Chart rows**: presence payloads converted for the charting component
//!
//! Page access (DOM, network) is provided by the host via traits. The `wasm`
//! feature adds a DOM-backed view and JavaScript bindings.
//!
//! # Example
//!
//! ```rust
//! use presence_core::{parse_interval, time_of_day};
//! use chrono::NaiveTime;
//!
//! assert_eq!(time_of_day(86_399), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
//! assert_eq!(parse_interval(0).time(), NaiveTime::MIN);
//! ```

#![forbid(unsafe_code)]

pub mod chart;
pub mod error;
pub mod interval;
pub mod selector;
pub mod traits;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use chart::{
    mean_time_rows, start_end_rows, weekday_presence_rows, ChartLoadRequest, ChartPackage,
};
pub use error::{PresenceError, Result};
pub use interval::{interval_from_secs_f64, parse_interval, time_of_day, REFERENCE_DATE};
pub use selector::{AvatarDisplay, PopulateSummary, SelectorController, SelectorState, UserDirectory};
pub use traits::{ChartLoader, SelectorView, UserSource};
pub use types::{
    MeanTimeEntry, MeanTimeRow, OptionEntry, RawUserRecord, StartEndEntry, StartEndRow,
    UserRecord, WeekdayPresenceEntry, WeekdayPresenceItem, WeekdayPresenceRow,
};
