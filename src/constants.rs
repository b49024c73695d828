/// Header/menu class names, selectors and the scroll threshold.
///
/// The class names must match the page stylesheet; the selectors are the
/// defaults used by `NavHeaderConfig::default()`.
// Offset (px) at or beyond which the header switches to its dark style
pub const SCROLL_THRESHOLD_PX: f64 = 200.0;

// Menu classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_TRANSLUCENT: &str = "translucent";

// Scroll-driven header classes
pub const CLASS_HEADER_DARK: &str = "header-dark";
pub const CLASS_HEADER_CLEAR: &str = "header-clear";
pub const CLASS_HEADER_CLEAR_MOD: &str = "header-clear-mod";
pub const CLASS_FADED: &str = "faded";

// Default selectors
pub const SEL_HEADER: &str = "#header";
pub const SEL_TOGGLE_BUTTON: &str = ".nav-btn";
pub const SEL_MENU_PANEL: &str = "#header-menu";
pub const SEL_MENU_ITEMS: &str = ".dropdown-menu a";
pub const SEL_DROPDOWN: &str = ".dropdown-menu";
pub const SEL_FADE: &str = "#fade";

// Event names
pub const EV_CLICK: &str = "click";
pub const EV_SCROLL: &str = "scroll";
pub const EV_DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
