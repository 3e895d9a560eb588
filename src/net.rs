//! HTTP calls to the action endpoints.
//!
//! Only a 2xx answer with a JSON body counts as a reply; anything else is a
//! transport failure and never reaches the user. Requests carry no timeout.

use gloo_net::http::Request;

use crate::actions::{ActionResponse, Outcome};
use crate::error::PageError;

/// `POST` to an action endpoint and interpret the reply.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a non-2xx
/// status, or the body is not an action response.
pub async fn post_action(path: &str) -> Result<Outcome, PageError> {
    let resp = Request::post(path).send().await?;
    if !resp.ok() {
        return Err(PageError::Transport(format!("{path} returned {}", resp.status())));
    }
    let body: ActionResponse = resp.json().await.map_err(|e| PageError::Response(e.to_string()))?;
    Ok(body.outcome())
}
