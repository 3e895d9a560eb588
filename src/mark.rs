//! Mark/unmark state machine for a post's bookmark button.
//!
//! The server owns the state. The page shows it as one of two buttons
//! (`#mark-post` or `#unmark-post`) and only swaps them after the server
//! confirms a transition.

#[cfg(test)]
#[path = "mark_test.rs"]
mod mark_test;

use crate::actions::{Effect, Outcome};
use crate::consts::{MARK_BUTTON_ID, TOOLTIP_CUSTOM_CLASS, UNMARK_BUTTON_ID};

/// The post and user a bookmark button acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostRef {
    pub user_id: u64,
    pub post_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkState {
    Unmarked,
    Marked,
}

impl MarkState {
    /// State shown by the button with this element id.
    #[must_use]
    pub fn from_button_id(id: &str) -> Option<Self> {
        match id {
            MARK_BUTTON_ID => Some(Self::Unmarked),
            UNMARK_BUTTON_ID => Some(Self::Marked),
            _ => None,
        }
    }

    /// Element id of the button that renders this state.
    #[must_use]
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Unmarked => MARK_BUTTON_ID,
            Self::Marked => UNMARK_BUTTON_ID,
        }
    }

    /// State after a confirmed click.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Unmarked => Self::Marked,
            Self::Marked => Self::Unmarked,
        }
    }

    /// Endpoint that requests the transition out of this state.
    #[must_use]
    pub fn transition_path(self, post: PostRef) -> String {
        let verb = match self {
            Self::Unmarked => "mark_post",
            Self::Marked => "unmark_post",
        };
        format!("/{verb}/{}/{}", post.user_id, post.post_id)
    }

    /// Effects of a settled transition request made from this state. The
    /// button only changes once the server has agreed.
    #[must_use]
    pub fn effects(self, post: PostRef, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Success => vec![Effect::SwapButton { to: self.toggled(), post }],
            Outcome::Failed(message) => vec![Effect::Alert(message)],
        }
    }

    fn tooltip_title(self) -> &'static str {
        match self {
            Self::Unmarked => "Mark this post",
            Self::Marked => "This post is marked",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            Self::Unmarked => "bi bi-bookmark-plus",
            Self::Marked => "bi bi-bookmark-check-fill",
        }
    }

    /// Markup for the button that renders this state for `post`.
    #[must_use]
    pub fn button_html(self, post: PostRef) -> String {
        format!(
            "<a class=\"text-body-secondary m-3\" type=\"button\" id=\"{id}\" data-postid=\"{post_id}\" \
             data-userid=\"{user_id}\" data-bs-custom-class=\"{TOOLTIP_CUSTOM_CLASS}\" data-bs-toggle=\"tooltip\" \
             data-bs-title=\"{title}\"><i class=\"{icon}\" style=\"font-size:1.5rem\"></i></a>",
            id = self.button_id(),
            post_id = post.post_id,
            user_id = post.user_id,
            title = self.tooltip_title(),
            icon = self.icon_class(),
        )
    }
}
