//! Error type shared by the page initializers and request helpers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the user except a server-reported failure, which the
//! action handlers turn into an alert. Everything else is logged by the
//! caller and the affected behavior is skipped.

/// Failures raised while wiring or running a page behavior.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no browser window")]
    NoWindow,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("element {element} is not a {expected}")]
    WrongElementType { element: String, expected: &'static str },
    #[error("missing attribute {attr} on {element}")]
    MissingAttribute { element: String, attr: String },
    #[error("attribute {attr} is not a valid id: {value:?}")]
    InvalidId { attr: String, value: String },
    #[error("javascript error: {0}")]
    Js(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response body: {0}")]
    Response(String),
    #[error("invalid page config: {0}")]
    Config(String),
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "web")]
impl From<gloo_net::Error> for PageError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Transport(value.to_string())
    }
}
