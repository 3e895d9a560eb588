//! Share button wiring.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, Event, Window};

use crate::config::PageConfig;
use crate::consts::{SHARE_BUTTON_SELECTOR, SHARE_TARGET};
use crate::dom;
use crate::error::PageError;
use crate::share::{Platform, ShareAction, share_action};

pub fn init(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    for button in dom::elements(&doc.query_selector_all(SHARE_BUTTON_SELECTOR)?) {
        let target = button.clone();
        let site_name = config.site_name.clone();
        dom::listen(&button, "click", move |_: Event| {
            if let Err(err) = share(&target, &site_name) {
                log::warn!("share: {err}");
            }
        })?;
    }
    Ok(())
}

fn share(button: &Element, site_name: &str) -> Result<(), PageError> {
    let Some(token) = button.class_list().item(1) else {
        return Ok(());
    };
    let Some(platform) = Platform::from_class(&token) else {
        log::debug!("no share platform named {token:?}");
        return Ok(());
    };

    let window = dom::window()?;
    let page_url = window.location().href()?;
    match share_action(platform, &page_url, site_name) {
        ShareAction::Open(url) => {
            window.open_with_url_and_target(&url, SHARE_TARGET)?;
        }
        ShareAction::CopyToClipboard(text) => write_clipboard(&window, &text)?,
        ShareAction::SetHref(href) => button.set_attribute("href", &href)?,
    }
    Ok(())
}

/// `navigator.clipboard.writeText(text)`; a rejected write is only logged.
fn write_clipboard(window: &Window, text: &str) -> Result<(), PageError> {
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| PageError::Js("navigator.clipboard.writeText unavailable".into()))?;
    let pending = write_text.call1(&clipboard, &JsValue::from_str(text))?;
    if let Some(promise) = pending.dyn_ref::<js_sys::Promise>() {
        let write = JsFuture::from(promise.clone());
        spawn_local(async move {
            if let Err(err) = write.await {
                log::warn!("clipboard write rejected: {}", PageError::from(err));
            }
        });
    }
    Ok(())
}
