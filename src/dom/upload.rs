//! Upload page panel switch, exposed to inline `onclick` handlers as
//! `showImageUpload()` and `showFileUpload()`.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, Window};

use crate::consts::{
    FIELD_CATEGORY_ID, FIELD_FILE_ID, FIELD_URL_ID, SUMMARY_CATEGORY_ID, SUMMARY_FILE_ID, SUMMARY_URL_ID,
};
use crate::dom;
use crate::error::PageError;
use crate::upload::{UploadMode, UploadSummary};

/// Install the two panel switches as globals on `window`.
pub fn expose(window: &Window) -> Result<(), PageError> {
    let handlers: [(&'static str, fn() -> Result<(), PageError>); 2] =
        [("showImageUpload", show_image_upload), ("showFileUpload", show_file_upload)];
    for (name, handler) in handlers {
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Err(err) = handler() {
                log::warn!("{name}: {err}");
            }
        });
        js_sys::Reflect::set(window, &JsValue::from_str(name), &callback.into_js_value())?;
    }
    Ok(())
}

fn show_image_upload() -> Result<(), PageError> {
    let doc = dom::document()?;
    let summary = UploadSummary::capture(
        &field_value(&doc, FIELD_CATEGORY_ID)?,
        &field_value(&doc, FIELD_FILE_ID)?,
        &field_value(&doc, FIELD_URL_ID)?,
    );
    show(&doc, UploadMode::Image)?;

    dom::by_id(&doc, SUMMARY_CATEGORY_ID)?.set_inner_html(&summary.category_html());
    dom::by_id(&doc, SUMMARY_FILE_ID)?.set_inner_html(&summary.file_html());
    dom::by_id(&doc, SUMMARY_URL_ID)?.set_inner_html(&summary.url_html());
    Ok(())
}

fn show_file_upload() -> Result<(), PageError> {
    show(&dom::document()?, UploadMode::File)
}

fn show(doc: &Document, mode: UploadMode) -> Result<(), PageError> {
    for (id, display) in mode.panel_display() {
        let card: HtmlElement = dom::by_id_as(doc, id)?;
        card.style().set_property("display", display)?;
    }
    Ok(())
}

/// `value` of a form control, whether it is an input, select, or textarea.
fn field_value(doc: &Document, id: &str) -> Result<String, PageError> {
    let el = dom::by_id(doc, id)?;
    Ok(js_sys::Reflect::get(&el, &JsValue::from_str("value"))?.as_string().unwrap_or_default())
}
