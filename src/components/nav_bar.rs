//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthService;
use crate::auth::cookies::DefaultCookies;
use crate::pages::search::search_href;
use crate::routes::WELCOME_PATH;
use crate::state::session::SessionState;

/// Brand link plus the menu matching the login status.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <nav class="navbar navbar-default">
            <div class="container">
                <a class="navbar-brand" href="/">"gonawin"</a>
                <Show
                    when=move || session.with(SessionState::is_logged_in)
                    fallback=|| {
                        view! {
                            <ul class="nav navbar-nav navbar-right">
                                <li><a href="/about">"About"</a></li>
                                <li><a href="/signin">"Sign in"</a></li>
                            </ul>
                        }
                    }
                >
                    <SignedInMenu/>
                </Show>
            </div>
        </nav>
    }
}

/// Section links, search box and logout for a signed-in user.
#[component]
fn SignedInMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());

    let user_name = move || session.with(|s| s.user().map(|u| u.user.display_name().to_owned()).unwrap_or_default());
    let user_href = move || session.with(|s| s.user().map(|u| format!("/users/{}", u.user.id)).unwrap_or_default());

    let navigate_search = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if q.trim().is_empty() {
            return;
        }
        navigate_search(&search_href(q.trim()), NavigateOptions::default());
    };

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        AuthService::<DefaultCookies>::default().clear();
        session.update(SessionState::sign_out);
        log::info!("signed out");
        navigate(WELCOME_PATH, NavigateOptions::default());
    };

    view! {
        <ul class="nav navbar-nav">
            <li><a href="/tournaments">"Tournaments"</a></li>
            <li><a href="/teams">"Teams"</a></li>
            <li><a href="/users/">"Users"</a></li>
            <li><a href="/invite">"Invite"</a></li>
        </ul>
        <form class="navbar-form navbar-left" on:submit=on_search>
            <input
                class="form-control"
                type="text"
                placeholder="Search"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </form>
        <ul class="nav navbar-nav navbar-right">
            <li><a href=user_href>{user_name}</a></li>
            <li><a href="/settings/edit-profile">"Settings"</a></li>
            <li><a href="#" on:click=on_logout>"Logout"</a></li>
        </ul>
    }
}
