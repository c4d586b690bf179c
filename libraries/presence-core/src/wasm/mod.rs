//! WASM bindings for presence-core
//!
//! This module provides WebAssembly bindings so the dashboard page can use
//! the interval converter, the chart bootstrap and a DOM-backed user
//! selector from JavaScript.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod view;

#[cfg(feature = "wasm")]
pub use bindings::{
    init_selector, load_charts, parse_interval_js, GoogleChartsLoader, WasmSelector,
};

#[cfg(feature = "wasm")]
pub use view::DomSelectorView;
