//! Presence Dashboard - terminal host for the presence dashboard core
//!
//! Loads configuration, talks to the presence API and renders the user
//! selector and chart rows as text.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;

pub use config::DashboardConfig;
pub use console::ConsoleView;
pub use error::{DashboardError, Result};
