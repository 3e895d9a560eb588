//! Theme switch wiring.

use web_sys::{Document, Element, Event, HtmlInputElement, Storage, Window};

use crate::config::PageConfig;
use crate::consts::{THEME_ATTR, THEME_SWITCHER_ID};
use crate::dom;
use crate::error::PageError;
use crate::theme::Theme;

pub fn init(window: &Window, doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let switcher: HtmlInputElement = dom::by_id_as(doc, THEME_SWITCHER_ID)?;
    let root = doc.document_element().ok_or_else(|| PageError::MissingElement("html".into()))?;
    let storage = window.local_storage()?.ok_or_else(|| PageError::Js("localStorage unavailable".into()))?;
    let key = config.theme_storage_key.clone();

    {
        let root = root.clone();
        let target = switcher.clone();
        let storage = storage.clone();
        let key = key.clone();
        dom::listen(&switcher, "change", move |_: Event| {
            if let Err(err) = toggle(&root, &target, &storage, &key) {
                log::warn!("theme toggle: {err}");
            }
        })?;
    }

    if let Some(stored) = storage.get_item(&key)? {
        match Theme::from_stored(&stored) {
            Some(theme) => apply(&root, &switcher, theme)?,
            None => log::warn!("ignoring stored theme {stored:?}"),
        }
    }
    Ok(())
}

fn toggle(root: &Element, switcher: &HtmlInputElement, storage: &Storage, key: &str) -> Result<(), PageError> {
    let next = Theme::from_attr(root.get_attribute(THEME_ATTR).as_deref()).toggled();
    apply(root, switcher, next)?;
    storage.set_item(key, next.as_str())?;
    log::debug!("theme -> {}", next.as_str());
    Ok(())
}

fn apply(root: &Element, switcher: &HtmlInputElement, theme: Theme) -> Result<(), PageError> {
    root.set_attribute(THEME_ATTR, theme.as_str())?;
    switcher.set_checked(theme.switch_checked());
    Ok(())
}
