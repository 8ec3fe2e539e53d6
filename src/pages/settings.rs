//! Account settings: connected networks and email address.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use super::users::profile_form_error;
use crate::auth::cookies::DefaultCookies;
use crate::auth::{AuthService, Provider};
use crate::components::messages::{MessageAlerts, Messages};
use crate::net::api;
use crate::state::session::SessionState;
use crate::util::route_scope::RouteScope;

/// Providers listed on the networks page, in display order.
pub const NETWORKS: [Provider; 4] = [Provider::Twitter, Provider::Facebook, Provider::Google, Provider::GooglePlus];

pub fn provider_label(provider: Provider) -> &'static str {
    match provider {
        Provider::Twitter => "Twitter",
        Provider::Facebook => "Facebook",
        Provider::Google => "Google",
        Provider::GooglePlus => "Google+",
    }
}

/// Status line for each network given the provider of the current session.
pub fn network_statuses(current: Option<Provider>) -> Vec<(&'static str, bool)> {
    NETWORKS
        .into_iter()
        .map(|provider| (provider_label(provider), current == Some(provider)))
        .collect()
}

#[component]
pub fn NetworksPage() -> impl IntoView {
    let current = AuthService::<DefaultCookies>::default().provider();
    view! {
        <div class="container">
            <h2>"Networks"</h2>
            <ul class="list-group">
                {network_statuses(current)
                    .into_iter()
                    .map(|(label, connected)| {
                        view! {
                            <li class="list-group-item">
                                {label}
                                " "
                                <span class="label" class:label-success=connected class:label-default={!connected}>
                                    {if connected { "signed in" } else { "not used" }}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn EmailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    Effect::new(move || {
        if let Some(current) = session.with(|s| s.user().map(|u| u.user.email.clone())) {
            if email.with_untracked(String::is_empty) {
                email.set(current);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(mut user) = session.with_untracked(|s| s.user().map(|u| u.user.clone())) else {
            return;
        };
        user.email = email.get_untracked().trim().to_owned();
        if let Some(error) = profile_form_error(&user) {
            messages.danger.set(Some(error.to_owned()));
            return;
        }
        scope.run(
            async move { api::users::update(&user.id.to_string(), &user).await },
            move |result| match result {
                Ok(envelope) => {
                    messages.info(envelope.message_info.as_deref().or(Some("Email updated.")));
                    session.update(|s| s.update_profile(envelope.user));
                }
                Err(err) => messages.fail(&err),
            },
        );
    };

    view! {
        <div class="container">
            <h2>"Email"</h2>
            <MessageAlerts messages=messages/>
            <form class="form-inline" on:submit=on_submit>
                <input
                    class="form-control"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" type="submit">"Save"</button>
            </form>
        </div>
    }
}
