//! Info and danger alerts shown at the top of a page.
//!
//! Pages surface the backend's `MessageInfo` as an info alert and request
//! failures as a danger alert. A 404 never reaches the alert because the
//! transport has already redirected to the not-found view.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::error::ApiError;

/// Danger text for a failed request, or `None` when the failure is handled
/// elsewhere.
pub fn danger_text(err: &ApiError) -> Option<String> {
    match err {
        ApiError::NotFound => None,
        other => Some(other.danger_message()),
    }
}

/// Info text from an envelope's `MessageInfo`, ignoring blanks.
pub fn info_text(message: Option<&str>) -> Option<String> {
    message.map(str::trim).filter(|text| !text.is_empty()).map(str::to_owned)
}

/// Per-page alert slots.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    pub info: RwSignal<Option<String>>,
    pub danger: RwSignal<Option<String>>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            info: RwSignal::new(None),
            danger: RwSignal::new(None),
        }
    }
}

impl Messages {
    /// Show the `MessageInfo` of a successful response.
    pub fn info(&self, message: Option<&str>) {
        if let Some(text) = info_text(message) {
            self.danger.set(None);
            self.info.set(Some(text));
        }
    }

    /// Show a request failure.
    pub fn fail(&self, err: &ApiError) {
        log::warn!("request failed: {err}");
        if let Some(text) = danger_text(err) {
            self.info.set(None);
            self.danger.set(Some(text));
        }
    }

    pub fn clear(&self) {
        self.info.set(None);
        self.danger.set(None);
    }
}

#[component]
pub fn MessageAlerts(messages: Messages) -> impl IntoView {
    view! {
        <Show when=move || messages.info.get().is_some()>
            <div class="alert alert-info">
                <button type="button" class="close" on:click=move |_| messages.info.set(None)>
                    "×"
                </button>
                {move || messages.info.get().unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || messages.danger.get().is_some()>
            <div class="alert alert-danger">
                <button type="button" class="close" on:click=move |_| messages.danger.set(None)>
                    "×"
                </button>
                {move || messages.danger.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
