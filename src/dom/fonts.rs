//! Flag the document once the Roboto faces are available.

use futures::future::try_join_all;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Document;

use crate::consts::{FONT_FACES, FONTS_LOADED_CLASS};
use crate::error::PageError;

pub fn init(doc: &Document) -> Result<(), PageError> {
    // Browsers without the CSS Font Loading API keep the fallback stack.
    if !js_sys::Reflect::has(doc, &JsValue::from_str("fonts"))? {
        return Ok(());
    }
    let fonts = doc.fonts();
    let loads: Vec<JsFuture> = FONT_FACES.iter().map(|face| JsFuture::from(fonts.load(face))).collect();
    let root = doc.document_element().ok_or_else(|| PageError::MissingElement("html".into()))?;

    spawn_local(async move {
        match try_join_all(loads).await {
            Ok(_) => {
                if let Err(err) = root.class_list().add_1(FONTS_LOADED_CLASS) {
                    log::warn!("fonts-loaded class: {}", PageError::from(err));
                }
            }
            Err(err) => log::warn!("web fonts not loaded: {}", PageError::from(err)),
        }
    });
    Ok(())
}
