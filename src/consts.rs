//! DOM contract shared by the page initializers: element ids, selectors,
//! class names, and attribute names the server-rendered templates carry.

// ── Theme ───────────────────────────────────────────────────────

/// Id of the theme checkbox in the navbar.
pub const THEME_SWITCHER_ID: &str = "themeSwitcher";

/// Attribute on `<html>` that Bootstrap reads to pick its color mode.
pub const THEME_ATTR: &str = "data-bs-theme";

/// Default `localStorage` key for the stored theme.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Navbar ──────────────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const AUTOHIDE_SELECTOR: &str = ".autohide";
pub const SCROLLED_UP_CLASS: &str = "scrolled-up";
pub const SCROLLED_DOWN_CLASS: &str = "scrolled-down";

// ── Tooltips ────────────────────────────────────────────────────

/// Elements that carry a bare `data-title` and need the Bootstrap attribute set.
pub const TITLED_ABBR_SELECTOR: &str = "abbr[data-title]";
pub const TOOLTIP_TRIGGER_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
pub const TOOLTIP_CUSTOM_CLASS: &str = "themed-tooltip";
pub const TOOLTIP_PLACEMENT: &str = "bottom";

// ── Modals ──────────────────────────────────────────────────────

pub const SUBSCRIBER_MODAL_ID: &str = "confirmationModal";
pub const POST_MODAL_ID: &str = "confirmationModalP";
pub const MODAL_SHOW_EVENT: &str = "show.bs.modal";
pub const MODAL_BODY_SELECTOR: &str = ".modal-body p";
pub const MODAL_CONFIRM_SELECTOR: &str = ".modal-footer a";

// ── Mark / unmark ───────────────────────────────────────────────

pub const MARK_BUTTON_ID: &str = "mark-post";
pub const UNMARK_BUTTON_ID: &str = "unmark-post";
pub const POST_ID_ATTR: &str = "data-postid";
pub const USER_ID_ATTR: &str = "data-userid";

// ── Upload panels ───────────────────────────────────────────────

pub const FIELD_CATEGORY_ID: &str = "fc-category";
pub const FIELD_FILE_ID: &str = "fc-file";
pub const FIELD_URL_ID: &str = "fc-url";
pub const FILE_UPLOAD_CARD_ID: &str = "file-upload-card";
pub const IMAGE_UPLOAD_CARD_ID: &str = "image-upload-card";
pub const SUMMARY_CATEGORY_ID: &str = "li-category";
pub const SUMMARY_FILE_ID: &str = "li-file";
pub const SUMMARY_URL_ID: &str = "li-url";

/// Prefix browsers put in front of the file name of an `<input type="file">`.
pub const FAKE_PATH_PREFIX: &str = "C:\\fakepath\\";

// ── Carousel ────────────────────────────────────────────────────

pub const CAROUSEL_SELECTOR: &str = ".carousel";
pub const CAROUSEL_INNER_SELECTOR: &str = ".carousel__inner";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Share ───────────────────────────────────────────────────────

pub const SHARE_BUTTON_SELECTOR: &str = ".share-button";
pub const SHARE_TARGET: &str = "_blank";

// ── Fonts ───────────────────────────────────────────────────────

pub const FONTS_LOADED_CLASS: &str = "fonts-loaded";

/// CSS font shorthands requested from `document.fonts` on load.
pub const FONT_FACES: [&str; 4] = ["1em Roboto", "700 1em Roboto", "italic 1em Roboto", "italic 700 1em Roboto"];

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional JSON `<script>` block that overrides [`crate::config::PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "page-config";
