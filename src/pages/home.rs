//! Landing, informational and fallback pages.

use leptos::prelude::*;

use crate::components::messages::{MessageAlerts, Messages};
use crate::state::page::PageState;
use crate::state::session::SessionState;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="jumbotron">
            <h1>"gonawin"</h1>
            <p>"Predict the results of your favourite tournaments with your friends."</p>
            <p>
                <a class="btn btn-primary btn-lg" href="/signin">"Sign in"</a>
                " "
                <a class="btn btn-default btn-lg" href="/getting-started">"Getting started"</a>
            </p>
        </div>
    }
}

#[component]
pub fn GettingStartedPage() -> impl IntoView {
    view! {
        <div class="container">
            <h2>"Getting started"</h2>
            <ol>
                <li>"Sign in with Twitter, Google or Facebook."</li>
                <li>"Create a team or join one your friends already play in."</li>
                <li>"Join a tournament, on your own or with your team."</li>
                <li>"Predict match results and climb the ranking."</li>
            </ol>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="container">
            <h2>"About gonawin"</h2>
            <p>"gonawin is a social sports prediction game."</p>
        </div>
    }
}

/// Signed-in landing page: the flash message left by the last redirect plus
/// the current user's teams and pending requests.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let page = expect_context::<RwSignal<PageState>>();
    let messages = Messages::default();

    if let Some(flash) = page.try_update(PageState::take_flash).flatten() {
        messages.info(Some(&flash));
    }

    let user = move || session.with(|s| s.user().cloned());

    view! {
        <div class="container">
            <MessageAlerts messages=messages/>
            <Show
                when=move || user().is_some()
                fallback=|| view! { <p>"Loading your profile..."</p> }
            >
                {move || {
                    user()
                        .map(|envelope| {
                            view! {
                                <h2>"Hi " {envelope.user.display_name().to_owned()}</h2>
                                <h3>"Your teams"</h3>
                                <ul class="list-unstyled">
                                    {envelope
                                        .teams
                                        .into_iter()
                                        .map(|team| {
                                            view! {
                                                <li><a href=format!("/teams/{}", team.id)>{team.name}</a></li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <h3>"Invitations"</h3>
                                <ul class="list-unstyled">
                                    {envelope
                                        .invitations
                                        .into_iter()
                                        .map(|team| {
                                            view! {
                                                <li><a href=format!("/teams/{}", team.id)>{team.name}</a></li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <h3>"Team requests"</h3>
                                <ul class="list-unstyled">
                                    {envelope
                                        .team_requests
                                        .into_iter()
                                        .map(|request| {
                                            view! {
                                                <li>{request.user_name} " wants to join " {request.team_name}</li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Show>
            <p>
                <a class="btn btn-primary" href="/tournaments">"Tournaments"</a>
                " "
                <a class="btn btn-default" href="/teams">"Teams"</a>
            </p>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container">
            <h2>"Page not found"</h2>
            <p>"The page you requested does not exist."</p>
            <a href="/">"Back to gonawin"</a>
        </div>
    }
}

/// Shown on the OAuth callback routes while sign-in completes.
#[component]
pub fn SigningInPage() -> impl IntoView {
    view! {
        <div class="container">
            <p>"Signing in..."</p>
        </div>
    }
}
