//! JavaScript-facing entry points

use super::view::DomSelectorView;
use crate::chart::{ChartLoadRequest, VISUALIZATION_MODULE};
use crate::error::PresenceError;
use crate::interval::parse_interval;
use crate::selector::{AvatarDisplay, SelectorController};
use crate::traits::ChartLoader;
use crate::types::RawUserRecord;
use chrono::{Datelike, Timelike};
use js_sys::{Array, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, Response};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = google, js_name = load)]
    fn google_load(module: &str, version: &str, options: &JsValue);
}

/// Convert seconds since midnight into a JavaScript `Date` in local time.
#[wasm_bindgen(js_name = parseInterval)]
pub fn parse_interval_js(value: u32) -> js_sys::Date {
    let at = parse_interval(value);
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        at.year() as u32,
        at.month0() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
        at.second() as i32,
    )
}

/// [`ChartLoader`] calling the global `google.load`
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleChartsLoader;

impl ChartLoader for GoogleChartsLoader {
    fn load(&self, request: &ChartLoadRequest) {
        let packages = Array::new();
        for name in request.package_names() {
            packages.push(&JsValue::from_str(name));
        }

        let options = Object::new();
        let _ = Reflect::set(&options, &"packages".into(), &packages);
        let _ = Reflect::set(
            &options,
            &"language".into(),
            &JsValue::from_str(&request.language),
        );

        tracing::debug!(
            packages = ?request.package_names(),
            language = %request.language,
            "Loading chart library"
        );
        google_load(VISUALIZATION_MODULE, &request.version, &options);
    }
}

/// Bootstrap the chart library, optionally overriding the locale.
#[wasm_bindgen(js_name = loadCharts)]
pub fn load_charts(language: Option<String>) {
    let mut request = ChartLoadRequest::default();
    if let Some(language) = language {
        request = request.with_language(language);
    }
    GoogleChartsLoader.load(&request);
}

/// User selector bound to the current page
#[wasm_bindgen]
pub struct WasmSelector {
    inner: Rc<RefCell<SelectorController<DomSelectorView>>>,
}

#[wasm_bindgen]
impl WasmSelector {
    /// Locate the page elements and enter the loading state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmSelector, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let view = DomSelectorView::from_document(&document)?;

        Ok(Self {
            inner: Rc::new(RefCell::new(SelectorController::new(view))),
        })
    }

    /// Populate from a user list response the page fetched itself.
    /// Returns the number of rendered entries.
    pub fn populate(&mut self, users: JsValue) -> Result<usize, JsValue> {
        let result = serde_wasm_bindgen::from_value::<Vec<RawUserRecord>>(users)
            .map_err(|e| PresenceError::fetch(e.to_string()));

        self.inner
            .borrow_mut()
            .complete(result)
            .map(|summary| summary.rendered)
            .map_err(to_js_error)
    }

    /// Record a failed user list request
    pub fn fail(&mut self, message: String) -> Result<(), JsValue> {
        match self.inner.borrow_mut().complete(Err(PresenceError::Fetch(message))) {
            Ok(_) | Err(PresenceError::Fetch(_)) => Ok(()),
            Err(e) => Err(to_js_error(e)),
        }
    }

    /// Handle a selection change. Returns the avatar URL now shown, if any.
    pub fn select(&mut self, user_id: f64) -> Result<Option<String>, JsValue> {
        let display = self
            .inner
            .borrow_mut()
            .select(user_id as i64)
            .map_err(to_js_error)?;
        Ok(shown_url(display))
    }

    /// Listen for `change` events on the selection control
    #[wasm_bindgen(js_name = bindChange)]
    pub fn bind_change(&self) -> Result<(), JsValue> {
        let select = self.inner.borrow().view().select_element().clone();
        let source = select.clone();
        let controller = Rc::clone(&self.inner);

        let on_change = Closure::wrap(Box::new(move |_event: Event| {
            let value = source.value();
            if let Err(e) = controller.borrow_mut().select_value(&value) {
                tracing::warn!(value = %value, error = %e, "Selection change ignored");
            }
        }) as Box<dyn FnMut(_)>);
        select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
        Ok(())
    }
}

/// Fetch the user list from `users_url`, populate the selector and start
/// reacting to selection changes.
///
/// A failed request leaves the error indicator visible and resolves with the
/// selector in its failed state; only a missing page element rejects.
#[wasm_bindgen(js_name = initSelector)]
pub async fn init_selector(users_url: String) -> Result<WasmSelector, JsValue> {
    let selector = WasmSelector::new()?;

    let outcome = fetch_users(&users_url).await;
    let populated = selector.inner.borrow_mut().complete(outcome);
    match populated {
        Ok(summary) => {
            tracing::info!(
                rendered = summary.rendered,
                skipped = summary.skipped,
                "Users loaded"
            );
            selector.bind_change()?;
        }
        Err(PresenceError::Fetch(message)) => {
            tracing::error!(url = %users_url, error = %message, "User list unavailable");
        }
        Err(e) => return Err(to_js_error(e)),
    }

    Ok(selector)
}

async fn fetch_users(users_url: &str) -> crate::error::Result<Vec<RawUserRecord>> {
    let window = web_sys::window().ok_or_else(|| PresenceError::fetch("No window available"))?;

    let response: Response = JsFuture::from(window.fetch_with_str(users_url))
        .await
        .map_err(|e| PresenceError::fetch(js_message(&e)))?
        .dyn_into()
        .map_err(|_| PresenceError::fetch("Not a Response"))?;

    if !response.ok() {
        return Err(PresenceError::fetch(format!(
            "Server error ({}): {}",
            response.status(),
            response.status_text()
        )));
    }

    let body = response
        .json()
        .map_err(|e| PresenceError::fetch(js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| PresenceError::fetch(js_message(&e)))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| PresenceError::fetch(e.to_string()))
}

fn shown_url(display: AvatarDisplay) -> Option<String> {
    match display {
        AvatarDisplay::Shown(url) => Some(url),
        AvatarDisplay::Hidden => None,
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn to_js_error(e: PresenceError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
