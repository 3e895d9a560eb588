//! Server round-trip actions: the response contract and the delete targets.
//!
//! Every action endpoint answers `{"status": "success"}` or
//! `{"status": "<anything else>", "message": "..."}`.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use serde::Deserialize;

use crate::consts::{POST_MODAL_ID, SUBSCRIBER_MODAL_ID};
use crate::error::PageError;
use crate::mark::{MarkState, PostRef};

pub const STATUS_SUCCESS: &str = "success";

/// Body returned by every action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the page should do with an action response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Server refused; the string is shown to the user as-is.
    Failed(String),
}

/// One step the page takes after an action request settles.
///
/// Returned by the decision functions so the browser glue only has to apply
/// them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking alert with the server's message.
    Alert(String),
    /// Close the confirmation modal with this id.
    HideModal(&'static str),
    /// Re-fetch the server-rendered page.
    Reload,
    /// Replace the bookmark button with the one rendering `to`.
    SwapButton { to: MarkState, post: PostRef },
}

impl ActionResponse {
    #[must_use]
    pub fn outcome(self) -> Outcome {
        if self.status == STATUS_SUCCESS {
            Outcome::Success
        } else {
            // A failure without a message still needs something to show.
            Outcome::Failed(self.message.unwrap_or(self.status))
        }
    }
}

/// Rows that can be deleted from the admin pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteKind {
    Subscriber,
    Comment,
    Post,
}

impl DeleteKind {
    pub const ALL: [Self; 3] = [Self::Subscriber, Self::Comment, Self::Post];

    /// Class carried by every delete button of this kind.
    #[must_use]
    pub fn trigger_class(self) -> &'static str {
        match self {
            Self::Subscriber => "delete-subscriber",
            Self::Comment => "delete-comment",
            Self::Post => "delete-post",
        }
    }

    /// `data-*` attribute on the button holding the row id.
    #[must_use]
    pub fn id_attr(self) -> &'static str {
        match self {
            Self::Subscriber => "data-subscriber-id",
            Self::Comment => "data-comment-id",
            Self::Post => "data-post-id",
        }
    }

    #[must_use]
    pub fn path(self, id: u64) -> String {
        let verb = match self {
            Self::Subscriber => "delete_subscriber",
            Self::Comment => "delete_comment",
            Self::Post => "delete_post",
        };
        format!("/{verb}/{id}")
    }

    /// Confirmation modal to close after a successful delete. Comments are
    /// deleted without one.
    #[must_use]
    pub fn modal_id(self) -> Option<&'static str> {
        match self {
            Self::Subscriber => Some(SUBSCRIBER_MODAL_ID),
            Self::Comment => None,
            Self::Post => Some(POST_MODAL_ID),
        }
    }

    /// Effects of a settled delete: close the modal and reload on success,
    /// otherwise alert and leave the row in place.
    #[must_use]
    pub fn effects(self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Success => self.modal_id().map(Effect::HideModal).into_iter().chain([Effect::Reload]).collect(),
            Outcome::Failed(message) => vec![Effect::Alert(message)],
        }
    }

    /// Match a clicked element's class list against the delete triggers.
    #[must_use]
    pub fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Option<Self> {
        classes.find_map(|class| Self::ALL.into_iter().find(|kind| kind.trigger_class() == class))
    }
}

/// Parse a numeric id from a data attribute value.
///
/// # Errors
///
/// Returns [`PageError::MissingAttribute`] when the attribute is absent and
/// [`PageError::InvalidId`] when it is not a non-negative integer.
pub fn parse_id(element: &str, attr: &str, raw: Option<&str>) -> Result<u64, PageError> {
    let raw = raw.ok_or_else(|| PageError::MissingAttribute { element: element.to_owned(), attr: attr.to_owned() })?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| PageError::InvalidId { attr: attr.to_owned(), value: raw.to_owned() })
}
