//! Markup attribute contract consumed from the surrounding HTML.

pub const INCLUDE: &str = "[data-include]";
pub const INCLUDE_ATTR: &str = "data-include";

pub const NAV_TOGGLE: &str = "[data-nav-toggle]";
pub const NAV_MENU: &str = "[data-nav-menu]";
pub const NAV_OPEN_ATTR: &str = "data-open";

pub const COLLAPSE_TOGGLE: &str = "[data-bs-toggle=\"collapse\"]";
pub const COLLAPSE_TARGET_ATTR: &str = "data-bs-target";
pub const SHOW: &str = "show";

pub const DARK_TOGGLE: &str = "[data-dark-toggle]";

pub const ANIMATE: &str = "[data-animate]";
pub const ANIMATE_ATTR: &str = "data-animate";

pub const MODAL_OPEN: &str = "[data-modal-open]";
pub const MODAL_OPEN_ATTR: &str = "data-modal-open";
pub const MODAL: &str = ".modal";
pub const MODAL_CLOSE: &str = "[data-modal-close]";

pub const FAQ_QUESTION: &str = ".faq-question";

pub const COUNTER: &str = "[data-counter]";
pub const COUNTER_ATTR: &str = "data-counter";
pub const COUNTER_DURATION_ATTR: &str = "data-duration";
pub const COUNTER_SUFFIX_ATTR: &str = "data-suffix";

pub const TAB: &str = "[data-tab]";
pub const TAB_ATTR: &str = "data-tab";
pub const TAB_PANE: &str = "[data-tab-pane]";
pub const TAB_PANE_ATTR: &str = "data-tab-pane";

pub const SECTION: &str = "[data-section]";
pub const SCROLLSPY: &str = "[data-scrollspy]";

pub const TOOLTIP: &str = "[data-tooltip]";
pub const TOOLTIP_ATTR: &str = "data-tooltip";

pub const AJAX_FORM: &str = "form[data-ajax]";
pub const FORM_STATUS: &str = "[data-form-status]";
pub const SUBMIT: &str = "[type=submit]";
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

pub const PRELOADER: &str = "[data-preloader]";
pub const FOOTER_YEAR_ID: &str = "current-year";
pub const SITE_CONFIG: &str = "script[data-site-config]";

// Shared class vocabulary
pub const ACTIVE: &str = "is-active";
pub const DARK_MODE: &str = "dark-mode";
pub const VISIBLE: &str = "is-visible";
pub const HIDDEN: &str = "is-hidden";
pub const TOOLTIP_CLASS: &str = "tooltip";
