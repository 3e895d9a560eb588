//! Click handling for the bookmark and delete buttons.
//!
//! One listener on the document serves every button, including the
//! bookmark button that gets replaced after each round-trip.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::actions::{DeleteKind, Effect, parse_id};
use crate::consts::{MARK_BUTTON_ID, POST_ID_ATTR, UNMARK_BUTTON_ID, USER_ID_ATTR};
use crate::dom;
use crate::dom::bootstrap::Modal;
use crate::dom::tooltips;
use crate::error::PageError;
use crate::mark::{MarkState, PostRef};
use crate::net;

pub fn init(doc: &Document) -> Result<(), PageError> {
    let mark_selector = format!("#{MARK_BUTTON_ID}, #{UNMARK_BUTTON_ID}");
    let delete_selector = DeleteKind::ALL.map(|kind| format!(".{}", kind.trigger_class())).join(", ");

    dom::listen(doc, "click", move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(target) = target.dyn_ref::<Element>() else {
            return;
        };

        let result = if let Some(button) = closest(target, &mark_selector) {
            event.prevent_default();
            toggle_mark(&button)
        } else if let Some(button) = closest(target, &delete_selector) {
            event.prevent_default();
            delete(&button)
        } else {
            Ok(())
        };
        if let Err(err) = result {
            log::warn!("action not sent: {err}");
        }
    })
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {}", PageError::from(err));
            None
        }
    }
}

fn toggle_mark(button: &Element) -> Result<(), PageError> {
    let name = format!("#{}", button.id());
    let state = MarkState::from_button_id(&button.id()).ok_or_else(|| PageError::MissingElement(name.clone()))?;
    let post = PostRef {
        user_id: parse_id(&name, USER_ID_ATTR, button.get_attribute(USER_ID_ATTR).as_deref())?,
        post_id: parse_id(&name, POST_ID_ATTR, button.get_attribute(POST_ID_ATTR).as_deref())?,
    };
    let path = state.transition_path(post);

    spawn_local(async move {
        match net::post_action(&path).await {
            Ok(outcome) => apply(state.effects(post, outcome)),
            Err(err) => log::error!("{path}: {err}"),
        }
    });
    Ok(())
}

/// Carry out settled-request effects in order.
fn apply(effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Alert(message) => dom::alert(&message),
            Effect::HideModal(id) => hide_modal(id),
            Effect::Reload => dom::reload(),
            Effect::SwapButton { to, post } => {
                if let Err(err) = render_mark(to, post) {
                    log::error!("bookmark swap: {err}");
                }
            }
        }
    }
}

/// Swap the bookmark button for the one rendering `next`.
fn render_mark(next: MarkState, post: PostRef) -> Result<(), PageError> {
    let doc = dom::document()?;
    let current = dom::by_id(&doc, next.toggled().button_id())?;
    tooltips::dispose(&current);
    current.set_outer_html(&next.button_html(post));

    let replacement = dom::by_id(&doc, next.button_id())?;
    tooltips::attach(&replacement)?;
    log::debug!("post {} now {next:?}", post.post_id);
    Ok(())
}

fn delete(button: &Element) -> Result<(), PageError> {
    let classes = button.class_name();
    let kind = DeleteKind::from_classes(classes.split_whitespace())
        .ok_or_else(|| PageError::MissingElement(format!("delete trigger in {classes:?}")))?;
    let id = parse_id(kind.trigger_class(), kind.id_attr(), button.get_attribute(kind.id_attr()).as_deref())?;
    let path = kind.path(id);

    spawn_local(async move {
        match net::post_action(&path).await {
            Ok(outcome) => apply(kind.effects(outcome)),
            Err(err) => log::error!("{path}: {err}"),
        }
    });
    Ok(())
}

fn hide_modal(id: &str) {
    let Ok(doc) = dom::document() else {
        return;
    };
    let Some(el) = doc.get_element_by_id(id) else {
        return;
    };
    match Modal::get_or_create_instance(&el) {
        Ok(modal) => modal.hide(),
        Err(err) => log::warn!("#{id}: {}", PageError::from(err)),
    }
}
