//! `ViewBinding` backed by the live page.
//!
//! Active classes and the revealed installation guide are Yew state so the
//! components re-render them; the URL, title and scrolling go straight to the
//! browser APIs.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::UseStateHandle;

use crate::selection::{HistoryMode, ViewBinding};

pub struct BrowserView {
    active: UseStateHandle<Option<&'static str>>,
    revealed_guide: UseStateHandle<Option<&'static str>>,
}

impl BrowserView {
    pub fn new(
        active: UseStateHandle<Option<&'static str>>,
        revealed_guide: UseStateHandle<Option<&'static str>>,
    ) -> Self {
        Self { active, revealed_guide }
    }
}

impl ViewBinding for BrowserView {
    fn activate(&mut self, product_id: &'static str) {
        // Hide the guide so it slides in again for the new product.
        self.revealed_guide.set(None);
        self.active.set(Some(product_id));
    }

    fn set_title(&mut self, title: &str) {
        if let Some(document) = window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn set_hash(&mut self, hash: &str, mode: HistoryMode) {
        let Some(window) = window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };

        // Re-selecting the current product must not stack duplicate entries.
        let unchanged = window.location().hash().map_or(false, |current| current == hash);
        let result = match mode {
            HistoryMode::Push if !unchanged => history.push_state_with_url(&JsValue::NULL, "", Some(hash)),
            _ => history.replace_state_with_url(&JsValue::NULL, "", Some(hash)),
        };

        if let Err(e) = result {
            warn!("Failed to update URL hash to {}: {:?}", hash, e);
        }
    }

    fn scroll_to(&mut self, element_id: &str) {
        // Wait for the pending render so a section that was hidden a moment ago can be measured.
        let element_id = element_id.to_string();
        Timeout::new(0, move || scroll_into_view(&element_id)).forget();
    }

    fn reveal_install_guide(&mut self, product_id: &'static str, delay_ms: u32) {
        let revealed_guide = self.revealed_guide.clone();
        Timeout::new(delay_ms, move || {
            revealed_guide.set(Some(product_id));
        })
        .forget();
    }
}

pub fn scroll_into_view(element_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.get_element_by_id(element_id))
    else {
        warn!("No element with id {} to scroll to", element_id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
