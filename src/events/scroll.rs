use super::Listener;
use crate::constants::EV_SCROLL;
use crate::dom;
use crate::state::NavElements;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(
    window: &web::Window,
    elements: &Rc<NavElements<web::Element>>,
    threshold: f64,
) -> Option<Listener> {
    let els = elements.clone();
    let wnd = window.clone();
    Listener::attach(window, EV_SCROLL, move |_ev: web::Event| {
        let offset = dom::scroll_offset(&wnd);
        let state = els.on_scroll_or_load(offset, threshold);
        log::trace!("[scroll] offset={:.0} state={:?}", offset, state);
    })
}
