//! Cookie storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth state must survive page reloads, so tokens live in cookies. The
//! browser implementation reads `document.cookie` on every call, which keeps
//! the guard's login check fresh. `MemoryCookies` backs tests and non-browser
//! builds.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Name/value cookie storage.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
    fn remove(&self, name: &str);
}

/// Find `name` in a `document.cookie` style string and decode its value.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| url::form_urlencoded::parse(pair.as_bytes()).next())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Encode a cookie assignment for `document.cookie`.
pub fn encode_cookie(name: &str, value: &str) -> String {
    let value: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
    format!("{name}={value}; path=/")
}

/// Cookie assignment that expires `name` immediately.
pub fn expire_cookie(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// In-memory jar for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.lock().ok()?.get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, name: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(name);
        }
    }
}

/// Jar over `document.cookie`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "csr")]
impl BrowserCookies {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast as _;

        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }
}

#[cfg(feature = "csr")]
impl CookieJar for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        parse_cookie(&header, name)
    }

    fn set(&self, name: &str, value: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&encode_cookie(name, value));
        }
    }

    fn remove(&self, name: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&expire_cookie(name));
        }
    }
}

/// Jar used by the running client.
#[cfg(feature = "csr")]
pub type DefaultCookies = BrowserCookies;

/// Jar used by the running client.
#[cfg(not(feature = "csr"))]
pub type DefaultCookies = MemoryCookies;
