//! Network fetching with timeout and abort support.
//!
//! [`BrowserTransport`] is the [`Transport`] used in the browser: every
//! request races a timeout and is wired to an `AbortController` so that a
//! cancelled search stops its in-flight request.

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

use crate::config::network::FETCH_TIMEOUT_MS;
use crate::core::cancel::CancelToken;
use crate::core::error::FetchError;
use crate::core::source::Transport;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(JsValue),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error(JsValue::from_str("Window not available"));
    };

    // Timeout promise resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e),
    }
}

// =============================================================================
// Transport
// =============================================================================

/// `window.fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get_text(
        &self,
        url: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<String, FetchError> {
        fetch_text(url, cancel).await
    }
}

/// Fetch text content from a URL.
pub async fn fetch_content(url: &str) -> Result<String, FetchError> {
    fetch_text(url, None).await
}

/// Fetch text from a URL using the Fetch API with timeout.
///
/// When `cancel` fires, the request is aborted and the call returns
/// [`FetchError::Aborted`].
async fn fetch_text(url: &str, cancel: Option<&CancelToken>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    if cancel.is_some_and(CancelToken::is_cancelled) {
        return Err(FetchError::Aborted);
    }

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    if let Some(token) = cancel
        && let Ok(controller) = AbortController::new()
    {
        opts.set_signal(Some(&controller.signal()));
        token.on_cancel(move || controller.abort());
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    let resp: Response = match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(err) => return Err(rejection(err, cancel)),
        RaceResult::Completed(result) => {
            result.dyn_into().map_err(|_| FetchError::InvalidContent)?
        }
    };

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|err| match rejection(err, cancel) {
            FetchError::Aborted => FetchError::Aborted,
            _ => FetchError::ResponseReadFailed,
        })?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Classify a rejected fetch promise.
fn rejection(err: JsValue, cancel: Option<&CancelToken>) -> FetchError {
    if cancel.is_some_and(CancelToken::is_cancelled) {
        return FetchError::Aborted;
    }
    let message = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string());
    FetchError::NetworkError(message)
}
