use crate::constants::{
    SCROLL_THRESHOLD_PX, SEL_DROPDOWN, SEL_FADE, SEL_HEADER, SEL_MENU_ITEMS, SEL_MENU_PANEL,
    SEL_TOGGLE_BUTTON,
};
use crate::error::ConfigError;
use std::str::FromStr;

/// Which elements a menu toggle touches.
///
/// `Basic` flips `active` on the menu panel and toggle button only.
/// `Translucent` additionally flips `translucent` on the header and
/// `active` on the dropdown container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleVariant {
    Basic,
    #[default]
    Translucent,
}

impl ToggleVariant {
    #[inline]
    pub fn touches_header(self) -> bool {
        matches!(self, ToggleVariant::Translucent)
    }

    pub fn name(self) -> &'static str {
        match self {
            ToggleVariant::Basic => "basic",
            ToggleVariant::Translucent => "translucent",
        }
    }
}

impl FromStr for ToggleVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ToggleVariant::Basic),
            "translucent" => Ok(ToggleVariant::Translucent),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Selectors and tuning the controller is constructed with.
#[derive(Clone, Debug, PartialEq)]
pub struct NavHeaderConfig {
    pub header: String,
    pub toggle_button: String,
    pub menu_panel: String,
    pub menu_items: String,
    /// Only consulted by `ToggleVariant::Translucent`.
    pub dropdown: String,
    pub fade: Option<String>,
    pub scroll_threshold: f64,
    pub variant: ToggleVariant,
    /// Fail construction when a required role matches nothing.
    pub strict: bool,
}

impl Default for NavHeaderConfig {
    fn default() -> Self {
        Self {
            header: SEL_HEADER.to_string(),
            toggle_button: SEL_TOGGLE_BUTTON.to_string(),
            menu_panel: SEL_MENU_PANEL.to_string(),
            menu_items: SEL_MENU_ITEMS.to_string(),
            dropdown: SEL_DROPDOWN.to_string(),
            fade: Some(SEL_FADE.to_string()),
            scroll_threshold: SCROLL_THRESHOLD_PX,
            variant: ToggleVariant::default(),
            strict: false,
        }
    }
}

impl NavHeaderConfig {
    pub fn basic() -> Self {
        Self::default().with_variant(ToggleVariant::Basic)
    }

    pub fn translucent() -> Self {
        Self::default().with_variant(ToggleVariant::Translucent)
    }

    pub fn with_variant(mut self, variant: ToggleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_threshold(mut self, px: f64) -> Self {
        self.scroll_threshold = px;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_header(mut self, selector: impl Into<String>) -> Self {
        self.header = selector.into();
        self
    }

    pub fn with_toggle_button(mut self, selector: impl Into<String>) -> Self {
        self.toggle_button = selector.into();
        self
    }

    pub fn with_menu_panel(mut self, selector: impl Into<String>) -> Self {
        self.menu_panel = selector.into();
        self
    }

    pub fn with_menu_items(mut self, selector: impl Into<String>) -> Self {
        self.menu_items = selector.into();
        self
    }

    pub fn with_dropdown(mut self, selector: impl Into<String>) -> Self {
        self.dropdown = selector.into();
        self
    }

    pub fn with_fade(mut self, selector: Option<String>) -> Self {
        self.fade = selector;
        self
    }

    /// Selector configured for a named role.
    pub fn selector_for(&self, role: &str) -> Option<&str> {
        match role {
            "header" => Some(&self.header),
            "toggle_button" => Some(&self.toggle_button),
            "menu_panel" => Some(&self.menu_panel),
            "menu_items" => Some(&self.menu_items),
            "dropdown" => Some(&self.dropdown),
            "fade" => self.fade.as_deref(),
            _ => None,
        }
    }

    /// Reject empty selectors and thresholds that can never compare sanely.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("header", &self.header),
            ("toggle_button", &self.toggle_button),
            ("menu_panel", &self.menu_panel),
            ("menu_items", &self.menu_items),
            ("dropdown", &self.dropdown),
        ];
        for (role, sel) in required {
            if sel.trim().is_empty() {
                return Err(ConfigError::EmptySelector(role));
            }
        }
        if let Some(fade) = &self.fade {
            if fade.trim().is_empty() {
                return Err(ConfigError::EmptySelector("fade"));
            }
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.scroll_threshold));
        }
        Ok(())
    }
}
