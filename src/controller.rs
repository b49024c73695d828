use crate::config::NavHeaderConfig;
use crate::dom;
use crate::error::NavError;
use crate::events::{click, scroll, Listener};
use crate::lifecycle::{BindState, Binding};
use crate::state::{NavElements, ScrollHeaderState};
use std::rc::Rc;
use web_sys as web;

/// Owns the header/menu elements and the listeners bound to them.
///
/// Elements are resolved once at construction. `bind()` attaches click and
/// scroll handlers and applies the scroll state for the current offset;
/// `unbind()` (or dropping the controller) detaches them again.
pub struct NavHeaderController {
    config: NavHeaderConfig,
    window: web::Window,
    elements: Rc<NavElements<web::Element>>,
    listeners: Vec<Listener>,
    bind_state: BindState,
}

impl NavHeaderController {
    pub fn new(config: NavHeaderConfig) -> Result<Self, NavError> {
        let window = web::window().ok_or(NavError::NoWindow)?;
        let document = window.document().ok_or(NavError::NoDocument)?;
        Self::with_document(window, &document, config)
    }

    pub fn with_document(
        window: web::Window,
        document: &web::Document,
        config: NavHeaderConfig,
    ) -> Result<Self, NavError> {
        config.validate()?;
        let elements = resolve_elements(document, &config)?;

        for role in elements.check_required(&config)? {
            log::warn!(
                "[nav] no element matches `{}` ({}); ignoring",
                config.selector_for(role).unwrap_or_default(),
                role
            );
        }
        if config.fade.is_some() && elements.fade.is_empty() {
            log::debug!("[nav] fade element not present");
        }

        Ok(Self {
            config,
            window,
            elements: Rc::new(elements),
            listeners: Vec::new(),
            bind_state: BindState::default(),
        })
    }

    pub fn bind(&mut self) {
        if !self.bind_state.begin_bind() {
            log::warn!("[bind] controller already bound; ignoring");
            return;
        }
        let variant = self.config.variant;
        self.listeners
            .extend(click::wire_toggle_click(&self.elements, variant));
        self.listeners
            .extend(click::wire_menu_item_click(&self.elements, variant));
        self.listeners.extend(scroll::wire_scroll(
            &self.window,
            &self.elements,
            self.config.scroll_threshold,
        ));

        let state = self.on_scroll_or_load();
        log::info!(
            "[bind] variant={} listeners={} initial={:?}",
            variant.name(),
            self.listeners.len(),
            state
        );
    }

    pub fn unbind(&mut self) {
        if !self.bind_state.begin_unbind() {
            return;
        }
        for l in self.listeners.drain(..) {
            log::trace!("[bind] detaching {}", l.event());
        }
        log::info!("[bind] unbound");
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.bind_state.is_bound()
    }

    pub fn config(&self) -> &NavHeaderConfig {
        &self.config
    }

    pub fn on_toggle_click(&self) -> bool {
        self.elements.on_toggle_click(self.config.variant)
    }

    pub fn on_menu_item_click(&self) {
        self.elements.on_menu_item_click(self.config.variant);
    }

    pub fn on_scroll_or_load(&self) -> ScrollHeaderState {
        let offset = dom::scroll_offset(&self.window);
        self.elements
            .on_scroll_or_load(offset, self.config.scroll_threshold)
    }

    pub fn is_menu_open(&self) -> bool {
        self.elements.is_menu_open()
    }

    pub fn scroll_state(&self) -> ScrollHeaderState {
        ScrollHeaderState::from_offset(
            dom::scroll_offset(&self.window),
            self.config.scroll_threshold,
        )
    }
}

fn resolve_elements(
    document: &web::Document,
    config: &NavHeaderConfig,
) -> Result<NavElements<web::Element>, NavError> {
    let fade = match &config.fade {
        Some(sel) => dom::query_all(document, sel)?,
        None => Vec::new(),
    };
    Ok(NavElements {
        header: dom::query_all(document, &config.header)?,
        toggle_button: dom::query_all(document, &config.toggle_button)?,
        menu_panel: dom::query_all(document, &config.menu_panel)?,
        menu_items: dom::query_all(document, &config.menu_items)?,
        dropdown: dom::query_all(document, &config.dropdown)?,
        fade,
    })
}

impl Binding for NavHeaderController {
    fn bind(&mut self) {
        NavHeaderController::bind(self);
    }

    fn unbind(&mut self) {
        NavHeaderController::unbind(self);
    }

    fn is_bound(&self) -> bool {
        NavHeaderController::is_bound(self)
    }
}
