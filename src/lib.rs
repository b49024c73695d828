#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
#[cfg(feature = "autostart")]
use wasm_bindgen::JsCast;

mod config;
mod constants;
mod controller;
mod dom;
mod error;
mod events;
mod lifecycle;
mod state;

pub use config::{NavHeaderConfig, ToggleVariant};
pub use controller::NavHeaderController;
pub use error::{ConfigError, NavError};
pub use lifecycle::{BindSlot, BindState, Binding};
pub use state::{ClassTarget, NavElements, ScrollHeaderState};

thread_local! {
    // Controller bound by `start` when the `autostart` feature is on
    static AUTO: RefCell<BindSlot<NavHeaderController>> = const { RefCell::new(BindSlot::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nav-header starting");

    #[cfg(feature = "autostart")]
    {
        if let Err(e) = autostart() {
            log::error!("autostart error: {:?}", e);
        }
    }
    Ok(())
}

// Bind now if the DOM is parsed, otherwise once DOMContentLoaded fires
#[cfg(feature = "autostart")]
fn autostart() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() != "loading" {
        return bind_default();
    }
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = bind_default() {
            log::error!("autostart error: {:?}", e);
        }
    });
    document
        .add_event_listener_with_callback(constants::EV_DOM_CONTENT_LOADED, on_ready.unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(feature = "autostart")]
fn bind_default() -> anyhow::Result<()> {
    let controller = NavHeaderController::new(NavHeaderConfig::default())?;
    AUTO.with(|slot| slot.borrow_mut().install(controller));
    Ok(())
}

/// Unbind and drop the controller installed at startup, if any.
#[wasm_bindgen]
pub fn shutdown() {
    AUTO.with(|slot| slot.borrow_mut().release());
}

#[inline]
fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS handle for a controller with a caller-chosen configuration.
#[wasm_bindgen]
pub struct NavHeader {
    inner: NavHeaderController,
}

#[wasm_bindgen]
impl NavHeader {
    #[wasm_bindgen(constructor)]
    pub fn new(
        variant: Option<String>,
        threshold: Option<f64>,
        strict: Option<bool>,
    ) -> Result<NavHeader, JsValue> {
        let mut config = NavHeaderConfig::default();
        if let Some(v) = variant {
            config = config.with_variant(v.parse::<ToggleVariant>().map_err(to_js)?);
        }
        if let Some(px) = threshold {
            config = config.with_threshold(px);
        }
        if let Some(s) = strict {
            config = config.with_strict(s);
        }
        let inner = NavHeaderController::new(config).map_err(to_js)?;
        Ok(NavHeader { inner })
    }

    /// Binds this controller, first releasing the one installed at startup
    /// so the same nodes never carry two click handlers.
    pub fn bind(&mut self) {
        if AUTO.with(|slot| slot.borrow_mut().release()) {
            log::warn!("[bind] releasing autostarted controller in favour of NavHeader");
        }
        self.inner.bind();
    }

    pub fn unbind(&mut self) {
        self.inner.unbind();
    }

    /// Same as clicking the toggle button; returns the new open state.
    pub fn toggle(&self) -> bool {
        self.inner.on_toggle_click()
    }

    pub fn close(&self) {
        self.inner.on_menu_item_click();
    }

    /// Re-apply scroll classes for the current offset; returns whether scrolled.
    pub fn refresh(&self) -> bool {
        self.inner.on_scroll_or_load().is_scrolled()
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.inner.config().variant.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn threshold(&self) -> f64 {
        self.inner.config().scroll_threshold
    }

    #[wasm_bindgen(js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.inner.is_bound()
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.inner.is_menu_open()
    }

    #[wasm_bindgen(js_name = isScrolled)]
    pub fn is_scrolled(&self) -> bool {
        self.inner.scroll_state().is_scrolled()
    }
}
