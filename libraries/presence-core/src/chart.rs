//! Chart bootstrap and chart row builders
//!
//! The dashboard pages render three charts per user: mean time of presence
//! per weekday, total presence per weekday, and a start-end timeline. The
//! presence API delivers seconds; these builders convert them into rows the
//! charting component can place on a time-of-day axis.

use crate::interval::{interval_from_secs_f64, parse_interval};
use crate::types::{
    MeanTimeEntry, MeanTimeRow, StartEndEntry, StartEndRow, WeekdayPresenceItem,
    WeekdayPresenceRow,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the library module requested from the loader
pub const VISUALIZATION_MODULE: &str = "visualization";

/// Display locale used for all charts
pub const DEFAULT_LANGUAGE: &str = "pl";

/// Chart package that can be requested from the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPackage {
    /// Bar, column and line charts
    CoreChart,
    /// Start-end timeline
    Timeline,
}

impl ChartPackage {
    /// Package name understood by the loader
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPackage::CoreChart => "corechart",
            ChartPackage::Timeline => "timeline",
        }
    }
}

impl fmt::Display for ChartPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of the chart library bootstrap call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLoadRequest {
    /// Library version
    pub version: String,
    /// Packages to load
    pub packages: Vec<ChartPackage>,
    /// Display locale
    pub language: String,
}

impl ChartLoadRequest {
    /// Override the display locale
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Package names in request order
    pub fn package_names(&self) -> Vec<&'static str> {
        self.packages.iter().map(|p| p.as_str()).collect()
    }
}

impl Default for ChartLoadRequest {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            packages: vec![ChartPackage::CoreChart, ChartPackage::Timeline],
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Build timeline rows from a `presence_start_end` payload
pub fn start_end_rows(entries: &[StartEndEntry]) -> Vec<StartEndRow> {
    entries
        .iter()
        .map(|StartEndEntry(weekday, start, end)| StartEndRow {
            weekday: weekday.clone(),
            start: parse_interval(interval_from_secs_f64(*start)),
            end: parse_interval(interval_from_secs_f64(*end)),
        })
        .collect()
}

/// Build time-of-day rows from a `mean_time_weekday` payload
pub fn mean_time_rows(entries: &[MeanTimeEntry]) -> Vec<MeanTimeRow> {
    entries
        .iter()
        .map(|MeanTimeEntry(weekday, mean)| MeanTimeRow {
            weekday: weekday.clone(),
            mean: parse_interval(interval_from_secs_f64(*mean)),
        })
        .collect()
}

/// Build total presence rows from a `presence_weekday` payload, dropping the
/// header row
pub fn weekday_presence_rows(items: &[WeekdayPresenceItem]) -> Vec<WeekdayPresenceRow> {
    items
        .iter()
        .filter_map(|item| match item {
            WeekdayPresenceItem::Entry(entry) => Some(WeekdayPresenceRow {
                weekday: entry.0.clone(),
                seconds: if entry.1.is_finite() && entry.1 > 0.0 {
                    entry.1.round() as u64
                } else {
                    0
                },
            }),
            WeekdayPresenceItem::Header(..) => None,
        })
        .collect()
}
