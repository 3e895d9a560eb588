//! Tooltip activation.

use web_sys::{Document, Element};

use crate::consts::{TITLED_ABBR_SELECTOR, TOOLTIP_TRIGGER_SELECTOR};
use crate::dom;
use crate::dom::bootstrap::Tooltip;
use crate::error::PageError;
use crate::tooltip::{attach_all, tooltip_attrs};

pub fn init(doc: &Document) -> Result<(), PageError> {
    for el in dom::elements(&doc.query_selector_all(TITLED_ABBR_SELECTOR)?) {
        let title = el.get_attribute("data-title").unwrap_or_default();
        for (name, value) in tooltip_attrs(&title) {
            el.set_attribute(name, &value)?;
        }
    }

    let triggers = dom::elements(&doc.query_selector_all(TOOLTIP_TRIGGER_SELECTOR)?);
    let attached = attach_all(&triggers, attach);
    log::debug!("{attached}/{} tooltips attached", triggers.len());
    Ok(())
}

/// Attach a tooltip to one trigger element.
pub fn attach(el: &Element) -> Result<(), PageError> {
    Tooltip::new(el)?;
    Ok(())
}

/// Dispose the tooltip bound to `el`, if any, so it does not outlive the element.
pub fn dispose(el: &Element) {
    if let Some(tooltip) = Tooltip::get_instance(el) {
        tooltip.dispose();
    }
}
