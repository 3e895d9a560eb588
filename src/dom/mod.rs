//! Browser glue: looks up the page's elements and wires each behavior to
//! its events.
//!
//! DESIGN
//! ======
//! Every initializer runs once at load and returns `Result`. A failing
//! initializer (usually a template without the expected elements) is
//! logged and skipped; the others still run. Decisions about what to do
//! live in the browser-free modules at the crate root; this layer only
//! reads the DOM, calls them, and writes the result back.

pub mod actions;
pub mod bootstrap;
pub mod carousel;
pub mod fonts;
pub mod modals;
pub mod navbar;
pub mod share;
pub mod theme;
pub mod tooltips;
pub mod upload;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlCollection, NodeList, Window};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::PageError;

/// Load config, start logging, and run every initializer once the document
/// has been parsed.
pub fn boot() -> Result<(), PageError> {
    let doc = document()?;

    let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let (config, config_err) = match PageConfig::from_json(raw.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.level()) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    if let Some(err) = config_err {
        log::warn!("using default page config: {err}");
    }

    if doc.ready_state() == "loading" {
        let mut pending = Some(config);
        listen(&doc, "DOMContentLoaded", move |_: Event| {
            if let Some(config) = pending.take() {
                run_initializers(&config);
            }
        })?;
    } else {
        run_initializers(&config);
    }
    Ok(())
}

fn run_initializers(config: &PageConfig) {
    let (window, doc) = match window().and_then(|w| document().map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(err) => {
            log::error!("page behaviors not started: {err}");
            return;
        }
    };

    report("fonts", fonts::init(&doc));
    report("theme", theme::init(&window, &doc, config));
    report("navbar", navbar::init(&window, &doc));
    report("tooltips", tooltips::init(&doc));
    report("modals", modals::init(&doc));
    report("actions", actions::init(&doc));
    report("upload", upload::expose(&window));
    report("carousel", carousel::init(&window, &doc));
    report("share", share::init(&doc, config));
    log::debug!("page behaviors ready");
}

fn report(name: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{name} skipped: {err}");
    }
}

// =============================================================================
// HELPERS
// =============================================================================

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoWindow)
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, PageError> {
    doc.get_element_by_id(id).ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}

/// Look up an element by id and cast it to a concrete element type.
pub fn by_id_as<T: JsCast>(doc: &Document, id: &str) -> Result<T, PageError> {
    cast(by_id(doc, id)?, &format!("#{id}"))
}

pub fn cast<T: JsCast>(el: Element, name: &str) -> Result<T, PageError> {
    el.dyn_into::<T>().map_err(|_| PageError::WrongElementType {
        element: name.to_owned(),
        expected: std::any::type_name::<T>(),
    })
}

/// Snapshot the elements of a node list.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Snapshot an element collection, so appending to the parent does not
/// extend the iteration.
pub fn collection(list: &HtmlCollection) -> Vec<Element> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Register `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Blocking alert with a server-supplied message.
pub fn alert(message: &str) {
    let result = window().and_then(|w| w.alert_with_message(message).map_err(PageError::from));
    if let Err(err) = result {
        log::error!("alert failed ({err}): {message}");
    }
}

pub fn reload() {
    let result = window().and_then(|w| w.location().reload().map_err(PageError::from));
    if let Err(err) = result {
        log::error!("reload failed: {err}");
    }
}
