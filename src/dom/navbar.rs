//! Fixed navbar: body padding and the scroll-direction classes.

use web_sys::{Document, Event, HtmlElement, Window};

use crate::consts::{AUTOHIDE_SELECTOR, NAVBAR_SELECTOR};
use crate::dom;
use crate::error::PageError;
use crate::scroll::{ScrollTracker, navbar_padding};

pub fn init(window: &Window, doc: &Document) -> Result<(), PageError> {
    let navbar = doc
        .query_selector(NAVBAR_SELECTOR)?
        .ok_or_else(|| PageError::MissingElement(NAVBAR_SELECTOR.into()))?;
    let navbar: HtmlElement = dom::cast(navbar, NAVBAR_SELECTOR)?;
    let body = doc.body().ok_or_else(|| PageError::MissingElement("body".into()))?;
    body.style().set_property("padding-top", &navbar_padding(navbar.offset_height()))?;

    let Some(autohide) = doc.query_selector(AUTOHIDE_SELECTOR)? else {
        return Ok(());
    };

    let source = window.clone();
    let mut tracker = ScrollTracker::new();
    dom::listen(window, "scroll", move |_: Event| {
        let offset = match source.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("scroll offset: {}", PageError::from(err));
                return;
            }
        };
        let direction = tracker.observe(offset);
        let classes = autohide.class_list();
        if let Err(err) = classes.remove_1(direction.opposite_class()).and_then(|()| classes.add_1(direction.class())) {
            log::warn!("autohide classes: {}", PageError::from(err));
        }
    })
}
