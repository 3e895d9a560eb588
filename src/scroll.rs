//! Scroll-direction tracking for the autohiding navbar.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{SCROLLED_DOWN_CLASS, SCROLLED_UP_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Class to add to the navbar for this direction.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => SCROLLED_UP_CLASS,
            Self::Down => SCROLLED_DOWN_CLASS,
        }
    }

    /// Class to remove, so exactly one of the pair stays on the element.
    #[must_use]
    pub fn opposite_class(self) -> &'static str {
        match self {
            Self::Up => SCROLLED_DOWN_CLASS,
            Self::Down => SCROLLED_UP_CLASS,
        }
    }
}

/// Last seen vertical offset. Starts at 0 on every page load.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new offset and report which way the page moved.
    ///
    /// Only a strictly smaller offset counts as up; an unchanged offset
    /// reports down.
    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        let direction = if offset < self.last_offset { ScrollDirection::Up } else { ScrollDirection::Down };
        self.last_offset = offset;
        direction
    }

    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

/// `padding-top` value that keeps content clear of a fixed navbar.
#[must_use]
pub fn navbar_padding(height_px: i32) -> String {
    format!("{height_px}px")
}
