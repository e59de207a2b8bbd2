use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::PageError;

/// Where a section currently sits relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub key: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Everything the page controller needs from the browser that isn't rendered
/// by a component. Lookups return `None` for missing elements and every call
/// is a no-op when its target is gone.
pub trait Host {
    /// Top of the section element relative to the page.
    fn section_offset_top(&self, key: &str) -> Option<f64>;
    fn scroll_window_to(&self, top: f64);
    fn set_background_scroll_locked(&self, locked: bool);
    fn alert(&self, message: &str);
    fn section_bounds(&self, keys: &[String]) -> Vec<SectionBounds>;
    fn viewport_height(&self) -> Option<f64>;
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(BrowserHost { window, document })
    }

    fn section(&self, key: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(key)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl Host for BrowserHost {
    fn section_offset_top(&self, key: &str) -> Option<f64> {
        self.section(key).map(|el| el.offset_top() as f64)
    }

    fn scroll_window_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_background_scroll_locked(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let overflow = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", overflow);
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn section_bounds(&self, keys: &[String]) -> Vec<SectionBounds> {
        keys.iter()
            .filter_map(|key| {
                let rect = self.document.get_element_by_id(key)?.get_bounding_client_rect();
                Some(SectionBounds {
                    key: key.clone(),
                    top: rect.top(),
                    height: rect.height(),
                })
            })
            .collect()
    }

    fn viewport_height(&self) -> Option<f64> {
        self.window.inner_height().ok()?.as_f64()
    }
}

/// Stand-in used when the page runs without a usable window, so the rest of
/// the UI keeps rendering.
pub struct DetachedHost;

impl Host for DetachedHost {
    fn section_offset_top(&self, _key: &str) -> Option<f64> {
        None
    }

    fn scroll_window_to(&self, _top: f64) {}

    fn set_background_scroll_locked(&self, _locked: bool) {}

    fn alert(&self, _message: &str) {}

    fn section_bounds(&self, _keys: &[String]) -> Vec<SectionBounds> {
        Vec::new()
    }

    fn viewport_height(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{Host, SectionBounds};

    /// Records every effect so tests can assert on what the browser would see.
    #[derive(Default)]
    pub struct RecordingHost {
        pub offsets: HashMap<String, f64>,
        pub bounds: Vec<SectionBounds>,
        pub viewport: Option<f64>,
        pub scrolls: RefCell<Vec<f64>>,
        pub alerts: RefCell<Vec<String>>,
        pub scroll_locked: Cell<bool>,
    }

    impl RecordingHost {
        pub fn with_sections(sections: &[(&str, f64)]) -> Self {
            RecordingHost {
                offsets: sections
                    .iter()
                    .map(|(key, top)| (key.to_string(), *top))
                    .collect(),
                ..Default::default()
            }
        }

        pub fn last_scroll(&self) -> Option<f64> {
            self.scrolls.borrow().last().copied()
        }

        pub fn last_alert(&self) -> Option<String> {
            self.alerts.borrow().last().cloned()
        }
    }

    impl Host for RecordingHost {
        fn section_offset_top(&self, key: &str) -> Option<f64> {
            self.offsets.get(key).copied()
        }

        fn scroll_window_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }

        fn set_background_scroll_locked(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn section_bounds(&self, keys: &[String]) -> Vec<SectionBounds> {
            self.bounds
                .iter()
                .filter(|b| keys.contains(&b.key))
                .cloned()
                .collect()
        }

        fn viewport_height(&self) -> Option<f64> {
            self.viewport
        }
    }
}
