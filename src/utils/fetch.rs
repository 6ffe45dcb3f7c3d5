//! Network fetching utilities.
//!
//! Thin wrapper over the Fetch API. Requests are issued once and awaited to
//! completion; callers decide how to surface failures.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::LoadError;

/// Fetch text from a URL using the Fetch API.
///
/// Non-2xx responses are reported as [`LoadError::Http`] with the status.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| LoadError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            LoadError::Network(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        })?;

    let resp: Response = result.dyn_into().map_err(|_| LoadError::ResponseRead)?;

    if !resp.ok() {
        return Err(LoadError::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| LoadError::ResponseRead)?)
        .await
        .map_err(|_| LoadError::ResponseRead)?;

    text.as_string().ok_or(LoadError::ResponseRead)
}
