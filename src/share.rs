//! Social share buttons.
//!
//! A share button is `<a class="share-button {platform}">`; the second class
//! token names the platform.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    WhatsApp,
    Facebook,
    X,
    Threads,
    Copy,
    Mail,
}

impl Platform {
    #[must_use]
    pub fn from_class(token: &str) -> Option<Self> {
        match token {
            "whatsapp" => Some(Self::WhatsApp),
            "facebook" => Some(Self::Facebook),
            "x" => Some(Self::X),
            "threads" => Some(Self::Threads),
            "copy" => Some(Self::Copy),
            "mail" => Some(Self::Mail),
            _ => None,
        }
    }
}

/// What a click on a share button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open the platform's share page in a new browsing context.
    Open(String),
    /// Put the page URL on the clipboard.
    CopyToClipboard(String),
    /// Point the clicked link itself at a `mailto:` URL and let the default
    /// action follow it.
    SetHref(String),
}

/// Build the action for `platform` sharing `page_url`.
///
/// The mail body carries the page URL unencoded, unlike the platform links.
#[must_use]
pub fn share_action(platform: Platform, page_url: &str, site_name: &str) -> ShareAction {
    let encoded = encode_uri_component(page_url);
    match platform {
        Platform::WhatsApp => ShareAction::Open(format!("https://api.whatsapp.com/send?text={encoded}")),
        Platform::Facebook => ShareAction::Open(format!("https://www.facebook.com/sharer/sharer.php?u={encoded}")),
        Platform::X => ShareAction::Open(format!("https://x.com/share?url={encoded}")),
        Platform::Threads => ShareAction::Open(format!("https://www.threads.net/intent/post?text={encoded}")),
        Platform::Copy => ShareAction::CopyToClipboard(page_url.to_owned()),
        Platform::Mail => {
            ShareAction::SetHref(format!("mailto:?subject=Check out this post on {site_name}!&body={page_url}"))
        }
    }
}

/// Percent-encode like JavaScript's `encodeURIComponent`, which also leaves
/// `!*'()` as-is.
#[must_use]
pub fn encode_uri_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%21", "!")
        .replace("%2A", "*")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
}
