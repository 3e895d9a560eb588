//! Delete-confirmation modals.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::confirm::{ConfirmKind, PromptBody};
use crate::consts::{MODAL_BODY_SELECTOR, MODAL_CONFIRM_SELECTOR, MODAL_SHOW_EVENT, POST_MODAL_ID, SUBSCRIBER_MODAL_ID};
use crate::dom;
use crate::error::PageError;

pub fn init(doc: &Document) -> Result<(), PageError> {
    for (id, kind) in [(SUBSCRIBER_MODAL_ID, ConfirmKind::Subscriber), (POST_MODAL_ID, ConfirmKind::Post)] {
        let Some(modal) = doc.get_element_by_id(id) else {
            continue;
        };
        let target = modal.clone();
        dom::listen(&modal, MODAL_SHOW_EVENT, move |event: Event| {
            if let Err(err) = fill(&target, kind, &event) {
                log::warn!("#{id}: {err}");
            }
        })?;
    }
    Ok(())
}

/// Rewrite the modal's prompt from the button that opened it.
fn fill(modal: &Element, kind: ConfirmKind, event: &Event) -> Result<(), PageError> {
    let trigger = js_sys::Reflect::get(event, &JsValue::from_str("relatedTarget"))?;
    let trigger = trigger.dyn_ref::<Element>().ok_or_else(|| PageError::WrongElementType {
        element: "relatedTarget".into(),
        expected: "Element",
    })?;

    let (label_attr, id_attr) = kind.trigger_attrs();
    let prompt = kind.prompt(trigger.get_attribute(label_attr).as_deref(), trigger.get_attribute(id_attr).as_deref());

    let body = modal
        .query_selector(MODAL_BODY_SELECTOR)?
        .ok_or_else(|| PageError::MissingElement(MODAL_BODY_SELECTOR.into()))?;
    match &prompt.body {
        PromptBody::Text(text) => body.set_text_content(Some(text)),
        PromptBody::Html(html) => body.set_inner_html(html),
    }

    let confirm = modal
        .query_selector(MODAL_CONFIRM_SELECTOR)?
        .ok_or_else(|| PageError::MissingElement(MODAL_CONFIRM_SELECTOR.into()))?;
    confirm.set_attribute(prompt.confirm_attr, &prompt.target_id)?;
    Ok(())
}
