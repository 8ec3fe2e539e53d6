//! Provider sign-in buttons.
//!
//! Twitter and Google use the backend redirect flow and come back through the
//! callback routes. The Google+ and Facebook buttons are rendered by their
//! JavaScript SDKs and report through the handlers the shell installs.

use leptos::prelude::*;

use crate::auth::sdk::GOOGLE_PLUS_CALLBACK;
use crate::config::AppConfig;
use crate::state::session::SessionState;

/// Backend URL starting the redirect sign-in for `provider`.
pub fn redirect_signin_href(api_base: &str, provider: &str) -> String {
    format!("{}/auth/{provider}", api_base.trim_end_matches('/'))
}

#[component]
pub fn SigninButtons() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api_base = AppConfig::from_env().api_base;
    let google_plus_client_id = move || {
        session.with(|s| {
            s.service_ids
                .as_ref()
                .map(|ids| ids.google_plus_client_id.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="signin-buttons">
            <a class="btn btn-info btn-block" rel="external" href=redirect_signin_href(&api_base, "twitter")>
                "Sign in with Twitter"
            </a>
            <a class="btn btn-danger btn-block" rel="external" href=redirect_signin_href(&api_base, "google")>
                "Sign in with Google"
            </a>
            <span
                class="g-signin"
                data-callback=GOOGLE_PLUS_CALLBACK
                data-clientid=google_plus_client_id
                data-cookiepolicy="single_host_origin"
                data-scope="https://www.googleapis.com/auth/plus.login https://www.googleapis.com/auth/userinfo.email"
            ></span>
            <div class="fb-login-button" data-scope="email" data-max-rows="1"></div>
        </div>
    }
}
