// Header/menu state transitions expressed over a minimal class-list trait.
// Nothing here touches web-sys, so host tests can drive it with a fake element.
use crate::config::{NavHeaderConfig, ToggleVariant};
use crate::constants::{
    CLASS_ACTIVE, CLASS_FADED, CLASS_HEADER_CLEAR, CLASS_HEADER_CLEAR_MOD, CLASS_HEADER_DARK,
    CLASS_TRANSLUCENT,
};
use crate::error::NavError;

/// The subset of `DOMTokenList` the controller needs.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flip `class`; returns whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollHeaderState {
    AtTop,
    Scrolled,
}

impl ScrollHeaderState {
    /// `Scrolled` iff `offset >= threshold`. A NaN offset reads as `AtTop`.
    #[inline]
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset >= threshold {
            ScrollHeaderState::Scrolled
        } else {
            ScrollHeaderState::AtTop
        }
    }

    #[inline]
    pub fn is_scrolled(self) -> bool {
        matches!(self, ScrollHeaderState::Scrolled)
    }
}

/// Elements matched for each configured role. Any list may be empty.
#[derive(Clone, Debug)]
pub struct NavElements<T> {
    pub header: Vec<T>,
    pub toggle_button: Vec<T>,
    pub menu_panel: Vec<T>,
    pub menu_items: Vec<T>,
    pub dropdown: Vec<T>,
    pub fade: Vec<T>,
}

impl<T> Default for NavElements<T> {
    fn default() -> Self {
        Self {
            header: Vec::new(),
            toggle_button: Vec::new(),
            menu_panel: Vec::new(),
            menu_items: Vec::new(),
            dropdown: Vec::new(),
            fade: Vec::new(),
        }
    }
}

impl<T> NavElements<T> {
    /// Roles the controller cannot do anything useful without.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.header.is_empty() {
            missing.push("header");
        }
        if self.toggle_button.is_empty() {
            missing.push("toggle_button");
        }
        if self.menu_panel.is_empty() {
            missing.push("menu_panel");
        }
        missing
    }

    /// Strict configs fail on the first missing required role. Lenient
    /// configs get the missing roles back so the caller can report them.
    /// An absent fade element or absent menu items are never an error.
    pub fn check_required(
        &self,
        config: &NavHeaderConfig,
    ) -> Result<Vec<&'static str>, NavError> {
        let missing = self.missing_required();
        match missing.first() {
            Some(&role) if config.strict => Err(NavError::MissingElement {
                role,
                selector: config.selector_for(role).unwrap_or_default().to_string(),
            }),
            _ => Ok(missing),
        }
    }
}

impl<T: ClassTarget> NavElements<T> {
    /// Flip the menu. Each element is toggled independently, matching how a
    /// class toggle over a selection behaves. Returns the resulting open state.
    pub fn on_toggle_click(&self, variant: ToggleVariant) -> bool {
        for el in self.menu_panel.iter().chain(&self.toggle_button) {
            el.toggle_class(CLASS_ACTIVE);
        }
        if variant.touches_header() {
            for el in &self.header {
                el.toggle_class(CLASS_TRANSLUCENT);
            }
            for el in &self.dropdown {
                el.toggle_class(CLASS_ACTIVE);
            }
        }
        self.is_menu_open()
    }

    /// Close the menu regardless of its current state.
    pub fn on_menu_item_click(&self, variant: ToggleVariant) {
        for el in self.menu_panel.iter().chain(&self.toggle_button) {
            el.remove_class(CLASS_ACTIVE);
        }
        if variant.touches_header() {
            for el in &self.header {
                el.remove_class(CLASS_TRANSLUCENT);
            }
            for el in &self.dropdown {
                el.remove_class(CLASS_ACTIVE);
            }
        }
    }

    /// Recompute header/fade classes from the current offset.
    pub fn on_scroll_or_load(&self, offset: f64, threshold: f64) -> ScrollHeaderState {
        let state = ScrollHeaderState::from_offset(offset, threshold);
        self.apply_scroll_state(state);
        state
    }

    pub fn apply_scroll_state(&self, state: ScrollHeaderState) {
        match state {
            ScrollHeaderState::Scrolled => {
                for el in &self.header {
                    el.add_class(CLASS_HEADER_DARK);
                    el.remove_class(CLASS_HEADER_CLEAR_MOD);
                    el.remove_class(CLASS_HEADER_CLEAR);
                }
                for el in &self.fade {
                    el.add_class(CLASS_FADED);
                }
            }
            ScrollHeaderState::AtTop => {
                for el in &self.header {
                    el.add_class(CLASS_HEADER_CLEAR_MOD);
                    el.add_class(CLASS_HEADER_CLEAR);
                    el.remove_class(CLASS_HEADER_DARK);
                }
                for el in &self.fade {
                    el.remove_class(CLASS_FADED);
                }
            }
        }
    }

    /// Open iff any matched menu panel carries `active`.
    pub fn is_menu_open(&self) -> bool {
        self.menu_panel.iter().any(|el| el.has_class(CLASS_ACTIVE))
    }
}
