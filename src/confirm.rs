//! Text for the two delete-confirmation modals.
//!
//! The modal is shared by every delete button on the page, so the prompt is
//! rebuilt from the triggering button's attributes each time it opens.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Attribute names read from the button that opened a confirmation modal.
pub const SUBSCRIBER_NAME_ATTR: &str = "data-bs-delsubname";
pub const SUBSCRIBER_ID_ATTR: &str = "data-bs-delsubid";
pub const POST_URL_ATTR: &str = "data-bs-delposturl";
pub const POST_ID_ATTR: &str = "data-bs-delpostid";

/// How the prompt is written into the modal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptBody {
    /// Plain text, set through `textContent`.
    Text(String),
    /// Markup, set through `innerHTML`.
    Html(String),
}

/// What a confirmation modal shows and hands to its confirm link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub body: PromptBody,
    /// `data-*` attribute to set on the confirm link.
    pub confirm_attr: &'static str,
    /// Value for `confirm_attr`: the id the delete handler will send.
    pub target_id: String,
}

/// Which confirmation modal is opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Subscriber,
    Post,
}

impl ConfirmKind {
    /// The two trigger attributes to read: (label, id).
    #[must_use]
    pub fn trigger_attrs(self) -> (&'static str, &'static str) {
        match self {
            Self::Subscriber => (SUBSCRIBER_NAME_ATTR, SUBSCRIBER_ID_ATTR),
            Self::Post => (POST_URL_ATTR, POST_ID_ATTR),
        }
    }

    /// Build the prompt from the trigger's label (name or URL) and id.
    ///
    /// Missing attributes render as empty strings, the way an unset
    /// attribute interpolates into the template.
    #[must_use]
    pub fn prompt(self, label: Option<&str>, id: Option<&str>) -> Prompt {
        let label = label.unwrap_or_default();
        let target_id = id.unwrap_or_default().to_owned();
        match self {
            Self::Subscriber => Prompt {
                body: PromptBody::Text(format!(
                    "Are you sure you want to delete {label} from the list of subscribers?"
                )),
                confirm_attr: "data-subscriber-id",
                target_id,
            },
            Self::Post => Prompt {
                body: PromptBody::Html(format!(
                    "You are about to delete the post with the URL: <br> <i><u>{label}</u></i> <br> \
                     This will also delete all the media files present in the post [images and audios].\
                     <br><br><b>ARE YOU SURE YOU WANT TO PROCEED?</b>"
                )),
                confirm_attr: "data-post-id",
                target_id,
            },
        }
    }
}
