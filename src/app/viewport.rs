use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::navigation::{Rect, Section, Viewport};

/// The browser window and the section elements rendered into it.
#[derive(Debug, Clone, Copy)]
pub struct DomViewport;

impl DomViewport {
    fn element(section: Section) -> Option<Element> {
        document().get_element_by_id(section.id())
    }
}

impl Viewport for DomViewport {
    fn bounding_box(&self, section: Section) -> Option<Rect> {
        let rect = Self::element(section)?.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn offset_top(&self, section: Section) -> Option<f64> {
        let el = Self::element(section)?.dyn_into::<HtmlElement>().ok()?;
        Some(el.offset_top() as f64)
    }

    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
