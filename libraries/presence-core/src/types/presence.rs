/// Chart data payloads served per user
///
/// The presence API encodes rows as JSON arrays, e.g. `["Mon", 32000.5]`,
/// so the wire types are tuple structs.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Mean presence time for one weekday: `[weekday, seconds]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanTimeEntry(pub String, pub f64);

/// Total presence time for one weekday: `[weekday, seconds]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPresenceEntry(pub String, pub f64);

/// Item of the `presence_weekday` payload.
///
/// The payload starts with a column header row (`["Weekday", "Presence (s)"]`)
/// followed by data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekdayPresenceItem {
    Entry(WeekdayPresenceEntry),
    Header(String, String),
}

/// Mean arrival and departure for one weekday: `[weekday, start, end]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartEndEntry(pub String, pub f64, pub f64);

/// Timeline row with both ends converted to calendar time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartEndRow {
    pub weekday: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Mean time-of-day row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeanTimeRow {
    pub weekday: String,
    pub mean: NaiveDateTime,
}

/// Total presence row, in whole seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayPresenceRow {
    pub weekday: String,
    pub seconds: u64,
}
