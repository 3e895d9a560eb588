//! Carousel strip duplication.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::carousel::{ANIMATED_ATTR, ARIA_HIDDEN_ATTR, copies_to_append, should_animate};
use crate::consts::{CAROUSEL_INNER_SELECTOR, CAROUSEL_SELECTOR, REDUCED_MOTION_QUERY};
use crate::dom;
use crate::error::PageError;

pub fn init(window: &Window, doc: &Document) -> Result<(), PageError> {
    let reduced_motion = window.match_media(REDUCED_MOTION_QUERY)?.is_some_and(|mq| mq.matches());
    if !should_animate(reduced_motion) {
        log::debug!("reduced motion requested; carousels left static");
        return Ok(());
    }

    for carousel in dom::elements(&doc.query_selector_all(CAROUSEL_SELECTOR)?) {
        let animated = carousel.get_attribute(ANIMATED_ATTR);
        let Some(inner) = carousel.query_selector(CAROUSEL_INNER_SELECTOR)? else {
            continue;
        };
        let items = dom::collection(&inner.children());
        let copies = copies_to_append(reduced_motion, animated.as_deref(), items.len());
        if copies == 0 {
            continue;
        }
        carousel.set_attribute(ANIMATED_ATTR, "true")?;
        for item in items.iter().take(copies) {
            append_copy(&inner, item)?;
        }
    }
    Ok(())
}

fn append_copy(inner: &Element, item: &Element) -> Result<(), PageError> {
    let copy = item.clone_node_with_deep(true)?;
    if let Some(copy) = copy.dyn_ref::<Element>() {
        copy.set_attribute(ARIA_HIDDEN_ATTR, "true")?;
    }
    inner.append_child(&copy)?;
    Ok(())
}
