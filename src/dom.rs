use crate::error::NavError;
use crate::state::ClassTarget;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>, NavError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| NavError::InvalidSelector {
            selector: selector.to_string(),
            message: format!("{:?}", e),
        })?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Vertical scroll offset of the viewport in CSS pixels.
pub fn scroll_offset(window: &web::Window) -> f64 {
    window
        .scroll_y()
        .ok()
        .or_else(|| {
            window
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.scroll_top() as f64)
        })
        .unwrap_or(0.0)
}

// DOMTokenList failures (e.g. a class name with whitespace) are dropped.
impl ClassTarget for web::Element {
    #[inline]
    fn add_class(&self, class: &str) {
        _ = self.class_list().add_1(class);
    }

    #[inline]
    fn remove_class(&self, class: &str) {
        _ = self.class_list().remove_1(class);
    }

    #[inline]
    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    #[inline]
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}
