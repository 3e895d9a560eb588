//! Bindings to the page's global `bootstrap` bundle.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(static_method_of = Tooltip, js_namespace = bootstrap, js_name = getInstance)]
    pub fn get_instance(element: &Element) -> Option<Tooltip>;

    #[wasm_bindgen(method)]
    pub fn dispose(this: &Tooltip);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    pub fn get_or_create_instance(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    pub fn hide(this: &Modal);
}
