//! Upload page: switch between the file panel and the image panel.
//!
//! The image panel repeats what was entered on the file panel so the author
//! can check it before attaching images.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::consts::{FAKE_PATH_PREFIX, FILE_UPLOAD_CARD_ID, IMAGE_UPLOAD_CARD_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    File,
    Image,
}

impl UploadMode {
    /// `display` values for (file card, image card).
    #[must_use]
    pub fn panel_display(self) -> [(&'static str, &'static str); 2] {
        match self {
            Self::File => [(FILE_UPLOAD_CARD_ID, "block"), (IMAGE_UPLOAD_CARD_ID, "none")],
            Self::Image => [(FILE_UPLOAD_CARD_ID, "none"), (IMAGE_UPLOAD_CARD_ID, "block")],
        }
    }
}

/// Values captured from the file panel's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub category: String,
    pub file_name: String,
    pub url: String,
}

impl UploadSummary {
    #[must_use]
    pub fn capture(category: &str, file_value: &str, url: &str) -> Self {
        Self {
            category: category.to_owned(),
            file_name: strip_fake_path(file_value).to_owned(),
            url: url.to_owned(),
        }
    }

    #[must_use]
    pub fn category_html(&self) -> String {
        format!("<b> Category:- </b>  {}", self.category)
    }

    #[must_use]
    pub fn file_html(&self) -> String {
        format!("<b> HTML file:- </b>  {}", self.file_name)
    }

    #[must_use]
    pub fn url_html(&self) -> String {
        format!("<b> URL:- </b>  {}", self.url)
    }
}

/// Drop the `C:\fakepath\` prefix browsers report for file inputs.
#[must_use]
pub fn strip_fake_path(value: &str) -> &str {
    value.strip_prefix(FAKE_PATH_PREFIX).unwrap_or(value)
}
