//! User list, profile and profile editing pages.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use super::use_id_param;
use crate::components::messages::{MessageAlerts, Messages};
use crate::net::api;
use crate::net::types::{User, UserEnvelope};
use crate::state::session::SessionState;
use crate::util::route_scope::RouteScope;

/// Related collections shown on a user's profile.
pub const PROFILE_INCLUDES: &str = "Teams Tournaments";

/// Why a profile edit cannot be submitted, if it cannot.
pub fn profile_form_error(user: &User) -> Option<&'static str> {
    if user.username.trim().is_empty() {
        return Some("Username is required.");
    }
    let email = user.email.trim();
    if !email.is_empty() && !email.contains('@') {
        return Some("Email address is not valid.");
    }
    None
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<User>::new());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    scope.load(api::users::query(), move |result| match result {
        Ok(list) => users.set(list),
        Err(err) => messages.fail(&err),
    });

    view! {
        <div class="container">
            <h2>"Users"</h2>
            <MessageAlerts messages=messages/>
            <table class="table">
                <thead>
                    <tr><th>"Name"</th><th>"Score"</th></tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|u| {
                                let name = u.display_name().to_owned();
                                view! {
                                    <tr>
                                        <td><a href=format!("/users/{}", u.id)>{name}</a></td>
                                        <td>{u.score}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn UserShowPage() -> impl IntoView {
    let id = use_id_param();
    let profile = RwSignal::new(None::<UserEnvelope>);
    let messages = Messages::default();
    let scope = RouteScope::attach();

    Effect::new(move || {
        let id = id.get();
        profile.set(None);
        scope.load(
            async move { api::users::get(&id, PROFILE_INCLUDES).await },
            move |result| match result {
                Ok(envelope) => profile.set(Some(envelope)),
                Err(err) => messages.fail(&err),
            },
        );
    });

    view! {
        <div class="container">
            <MessageAlerts messages=messages/>
            {move || {
                profile
                    .get()
                    .map(|envelope| {
                        view! {
                            <h2>{envelope.user.display_name().to_owned()}</h2>
                            <p>"Score: " {envelope.user.score}</p>
                            <h3>"Teams"</h3>
                            <ul>
                                {envelope
                                    .teams
                                    .into_iter()
                                    .map(|t| view! { <li><a href=format!("/teams/{}", t.id)>{t.name}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <h3>"Tournaments"</h3>
                            <ul>
                                {envelope
                                    .tournaments
                                    .into_iter()
                                    .map(|t| view! { <li><a href=format!("/tournaments/{}", t.id)>{t.name}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })
            }}
        </div>
    }
}

/// Edit the signed-in user's profile.
#[component]
pub fn EditProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(User::default());
    let messages = Messages::default();
    let busy = RwSignal::new(false);
    let scope = RouteScope::attach();

    // Prefill once the current user has loaded.
    Effect::new(move || {
        if let Some(user) = session.with(|s| s.user().map(|u| u.user.clone())) {
            if form.with_untracked(|f| f.id == 0) {
                form.set(user);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = form.get();
        if let Some(error) = profile_form_error(&user) {
            messages.danger.set(Some(error.to_owned()));
            return;
        }
        busy.set(true);
        scope.run(
            async move { api::users::update(&user.id.to_string(), &user).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(envelope) => {
                        messages.info(envelope.message_info.as_deref().or(Some("Profile updated.")));
                        session.update(|s| s.update_profile(envelope.user));
                    }
                    Err(err) => messages.fail(&err),
                }
            },
        );
    };

    view! {
        <div class="container">
            <h2>"Edit profile"</h2>
            <MessageAlerts messages=messages/>
            <form class="form-horizontal" on:submit=on_submit>
                <ProfileField label="Username" form=form get=|u| u.username.clone() set=|u, v| u.username = v/>
                <ProfileField label="Name" form=form get=|u| u.name.clone() set=|u, v| u.name = v/>
                <ProfileField label="Alias" form=form get=|u| u.alias.clone() set=|u, v| u.alias = v/>
                <ProfileField label="Email" form=form get=|u| u.email.clone() set=|u, v| u.email = v/>
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ProfileField(
    label: &'static str,
    form: RwSignal<User>,
    get: fn(&User) -> String,
    set: fn(&mut User, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="control-label">{label}</label>
            <input
                class="form-control"
                type="text"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|u| set(u, value));
                }
            />
        </div>
    }
}
