use super::Listener;
use crate::config::ToggleVariant;
use crate::constants::EV_CLICK;
use crate::state::NavElements;
use std::rc::Rc;
use web_sys as web;

// One listener per matched toggle button
pub fn wire_toggle_click(
    elements: &Rc<NavElements<web::Element>>,
    variant: ToggleVariant,
) -> Vec<Listener> {
    elements
        .toggle_button
        .iter()
        .filter_map(|button| {
            let els = elements.clone();
            Listener::attach(button, EV_CLICK, move |_ev: web::Event| {
                let open = els.on_toggle_click(variant);
                log::debug!("[nav] toggle -> open={}", open);
            })
        })
        .collect()
}

// Menu entries only ever close; navigation proceeds as normal
pub fn wire_menu_item_click(
    elements: &Rc<NavElements<web::Element>>,
    variant: ToggleVariant,
) -> Vec<Listener> {
    elements
        .menu_items
        .iter()
        .filter_map(|item| {
            let els = elements.clone();
            Listener::attach(item, EV_CLICK, move |_ev: web::Event| {
                els.on_menu_item_click(variant);
                log::debug!("[nav] menu item -> closed");
            })
        })
        .collect()
}
