//! HTTP transport for the REST client.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Elsewhere: every request fails with [`ApiError::Unavailable`] so pure logic
//! stays testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Status classification runs for every response. A 404 invokes the
//! registered not-found handler (the shell points it at `/404`) before the
//! error reaches the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP verbs used by the resource client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

thread_local! {
    static NOT_FOUND_HANDLER: RefCell<Option<Box<dyn Fn()>>> = RefCell::new(None);
}

/// Register the callback run whenever any request answers 404.
pub fn set_not_found_handler(handler: impl Fn() + 'static) {
    NOT_FOUND_HANDLER.with(|slot| *slot.borrow_mut() = Some(Box::new(handler)));
}

fn notify_not_found() {
    NOT_FOUND_HANDLER.with(|slot| {
        if let Some(handler) = slot.borrow().as_ref() {
            handler();
        }
    });
}

/// Build `base + path` with an encoded query string. Empty query values are
/// skipped.
pub fn endpoint(base: &str, path: &str, query: &[(&str, &str)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in query.iter().filter(|(_, value)| !value.is_empty()) {
        serializer.append_pair(key, value);
        any = true;
    }
    if any {
        url.push('?');
        url.push_str(&serializer.finish());
    }
    url
}

/// Map a response status to the error the caller sees.
pub(crate) fn classify(status: u16, body: String) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        404 => {
            notify_not_found();
            Err(ApiError::NotFound)
        }
        _ => Err(ApiError::Status { status, body }),
    }
}

/// Decode a response body. An empty body decodes to `T::default()`.
pub(crate) fn decode_body<T: DeserializeOwned + Default>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request and decode its JSON response.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status, or a body
/// that does not decode as `T`.
pub async fn request<T: DeserializeOwned + Default>(
    method: Method,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::Request;

        log::debug!("api {method:?} {url}");
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Delete => Request::delete(url),
        };
        let sent = match body {
            Some(payload) => {
                builder
                    .json(payload)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if let Err(err) = classify(status, text.clone()) {
            log::warn!("api {method:?} {url} failed: {err}");
            return Err(err);
        }
        decode_body(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, url, body);
        Err(ApiError::Unavailable)
    }
}
