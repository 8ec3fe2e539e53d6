//! Glue for the provider JavaScript SDKs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Facebook SDK is loaded by injecting a script tag; once it calls
//! `window.fbAsyncInit` it is initialised with the app id from the backend and
//! its login-status changes are forwarded as [`ProviderEvent`]s. The Google+
//! button reports through a global callback registered here. Everything that
//! touches `window` is browser-only; the event mapping is plain Rust.

#[cfg(test)]
#[path = "sdk_test.rs"]
mod sdk_test;

use super::service::Provider;
use super::signin::ProviderEvent;

/// Global function name the Google+ sign-in button calls back into.
pub const GOOGLE_PLUS_CALLBACK: &str = "gonawinGooglePlusSignin";

/// Channel file handed to `FB.init`.
pub const FACEBOOK_CHANNEL_URL: &str = "app/templates/channel.html";

/// Map a Facebook `authResponse` status change to a sign-in event.
///
/// Statuses other than `connected` are not sign-in attempts and map to `None`.
pub fn facebook_status_event(status: &str, access_token: Option<String>) -> Option<ProviderEvent> {
    if status != "connected" {
        return None;
    }
    Some(match access_token.filter(|token| !token.is_empty()) {
        Some(access_token) => ProviderEvent::Success {
            provider: Provider::Facebook,
            access_token,
        },
        None => ProviderEvent::Failure {
            provider: Provider::Facebook,
            reason: "connected without access token".to_owned(),
        },
    })
}

/// Map a Google+ `authResult` to a sign-in event.
pub fn google_plus_event(access_token: Option<String>, error: Option<String>) -> ProviderEvent {
    match (access_token.filter(|token| !token.is_empty()), error) {
        (Some(access_token), None) => ProviderEvent::Success {
            provider: Provider::GooglePlus,
            access_token,
        },
        (_, Some(reason)) => ProviderEvent::Failure {
            provider: Provider::GooglePlus,
            reason,
        },
        (None, None) => ProviderEvent::Failure {
            provider: Provider::GooglePlus,
            reason: "no access token".to_owned(),
        },
    }
}

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    use super::{FACEBOOK_CHANNEL_URL, GOOGLE_PLUS_CALLBACK, facebook_status_event, google_plus_event};
    use crate::auth::signin::ProviderEvent;
    use crate::config::{FACEBOOK_SDK_ID, FACEBOOK_SDK_SRC};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = FB, js_name = init)]
        fn fb_init(options: &JsValue);

        #[wasm_bindgen(js_namespace = ["FB", "Event"], js_name = subscribe)]
        fn fb_subscribe(event: &str, callback: &Closure<dyn FnMut(JsValue)>);
    }

    fn string_at(value: &JsValue, path: &[&str]) -> Option<String> {
        let mut current = value.clone();
        for key in path {
            current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        }
        current.as_string()
    }

    fn set_global(name: &str, value: &JsValue) {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::set(&window, &JsValue::from_str(name), value);
        }
    }

    /// Insert the Facebook SDK script tag unless it is already present.
    pub fn inject_facebook_sdk() {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if doc.get_element_by_id(FACEBOOK_SDK_ID).is_some() {
            return;
        }
        let Ok(script) = doc.create_element("script") else {
            return;
        };
        let Ok(script) = script.dyn_into::<web_sys::HtmlScriptElement>() else {
            return;
        };
        script.set_id(FACEBOOK_SDK_ID);
        script.set_async(true);
        script.set_src(FACEBOOK_SDK_SRC);

        let first = doc.get_elements_by_tag_name("script").item(0);
        match first.as_ref().and_then(|node| node.parent_node().map(|parent| (node, parent))) {
            Some((first, parent)) => {
                let first: &web_sys::Node = first;
                let _ = parent.insert_before(&script, Some(first));
            }
            None => {
                if let Some(head) = doc.head() {
                    let _ = head.append_child(&script);
                }
            }
        }
    }

    /// Register `window.fbAsyncInit`: initialise the SDK with `app_id` and
    /// forward login-status changes to `on_event`.
    pub fn install_facebook_init(app_id: String, on_event: impl Fn(ProviderEvent) + 'static) {
        let on_status = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let status = string_at(&response, &["status"]).unwrap_or_default();
            let token = string_at(&response, &["authResponse", "accessToken"]);
            if let Some(event) = facebook_status_event(&status, token) {
                on_event(event);
            }
        });
        let init = Closure::<dyn FnMut()>::new(move || {
            let options = js_sys::Object::new();
            for (key, value) in [
                ("appId", JsValue::from_str(&app_id)),
                ("channelUrl", JsValue::from_str(FACEBOOK_CHANNEL_URL)),
                ("status", JsValue::TRUE),
                ("cookie", JsValue::TRUE),
                ("xfbml", JsValue::TRUE),
            ] {
                let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &value);
            }
            fb_init(&options);
            fb_subscribe("auth.authResponseChange", &on_status);
            log::debug!("facebook sdk initialised");
        });
        set_global("fbAsyncInit", init.as_ref());
        init.forget();
    }

    /// Register the global callback used by the Google+ sign-in button.
    pub fn install_google_plus_callback(on_event: impl Fn(ProviderEvent) + 'static) {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |auth_result: JsValue| {
            let token = string_at(&auth_result, &["access_token"]);
            let error = string_at(&auth_result, &["error"]);
            on_event(google_plus_event(token, error));
        });
        set_global(GOOGLE_PLUS_CALLBACK, callback.as_ref());
        callback.forget();
    }
}

#[cfg(feature = "csr")]
pub use browser::{inject_facebook_sdk, install_facebook_init, install_google_plus_callback};
