//! Light/dark theme preference.
//!
//! The document's `data-bs-theme` attribute, the navbar switch, and the
//! stored preference always carry the same [`Theme`]. The switch is checked
//! exactly when the theme is dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read a theme from the document attribute or storage.
    ///
    /// Only `"dark"` is dark; any other value (including a missing one) reads
    /// as light, matching how Bootstrap treats an unknown color mode.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Parse a stored preference, rejecting anything but the two known values.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Checked state of the theme switch for this theme.
    #[must_use]
    pub fn switch_checked(self) -> bool {
        self == Self::Dark
    }
}
