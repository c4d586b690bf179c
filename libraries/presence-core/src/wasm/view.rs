//! DOM-backed selector view

use crate::traits::SelectorView;
use crate::types::OptionEntry;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlOptionElement, HtmlSelectElement};

/// Id of the loading indicator
pub const LOADING_ID: &str = "loading";
/// Selector of the avatar image
pub const AVATAR_SELECTOR: &str = "img#user_avatar";
/// Id of the user selection control
pub const SELECT_ID: &str = "user_id";
/// Id of the optional error indicator
pub const ERROR_ID: &str = "error";

/// [`SelectorView`] over the page elements agreed with the page template
pub struct DomSelectorView {
    loading: HtmlElement,
    select: HtmlSelectElement,
    avatar: HtmlImageElement,
    error: Option<HtmlElement>,
}

impl DomSelectorView {
    /// Locate the page elements in `document`
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let loading = document
            .get_element_by_id(LOADING_ID)
            .ok_or_else(|| missing(LOADING_ID))?
            .dyn_into::<HtmlElement>()?;
        let select = document
            .get_element_by_id(SELECT_ID)
            .ok_or_else(|| missing(SELECT_ID))?
            .dyn_into::<HtmlSelectElement>()?;
        let avatar = document
            .query_selector(AVATAR_SELECTOR)?
            .ok_or_else(|| missing(AVATAR_SELECTOR))?
            .dyn_into::<HtmlImageElement>()?;
        let error = document
            .get_element_by_id(ERROR_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        Ok(Self {
            loading,
            select,
            avatar,
            error,
        })
    }

    /// The user selection control
    pub fn select_element(&self) -> &HtmlSelectElement {
        &self.select
    }
}

fn missing(selector: &str) -> JsValue {
    JsValue::from_str(&format!("Element not found: {}", selector))
}

fn set_visible(element: &HtmlElement, visible: bool) {
    let style = element.style();
    // Style writes only fail on read-only declarations
    if visible {
        let _ = style.remove_property("display");
    } else {
        let _ = style.set_property("display", "none");
    }
}

impl SelectorView for DomSelectorView {
    fn show_loading(&mut self) {
        set_visible(&self.loading, true);
    }

    fn hide_loading(&mut self) {
        set_visible(&self.loading, false);
    }

    fn hide_selector(&mut self) {
        set_visible(&self.select, false);
    }

    fn show_selector(&mut self) {
        set_visible(&self.select, true);
    }

    fn append_option(&mut self, entry: &OptionEntry) {
        match HtmlOptionElement::new_with_text_and_value(&entry.label, &entry.value.to_string()) {
            Ok(option) => {
                if let Err(e) = self.select.add_with_html_option_element(&option) {
                    tracing::warn!(value = entry.value, error = ?e, "Failed to append option");
                }
            }
            Err(e) => tracing::warn!(value = entry.value, error = ?e, "Failed to create option"),
        }
    }

    fn hide_avatar(&mut self) {
        set_visible(&self.avatar, false);
    }

    fn set_avatar_source(&mut self, url: &str) {
        self.avatar.set_src(url);
    }

    fn show_avatar(&mut self) {
        set_visible(&self.avatar, true);
    }

    fn show_error(&mut self, message: &str) {
        if let Some(error) = &self.error {
            error.set_text_content(Some(message));
            set_visible(error, true);
        }
    }
}
