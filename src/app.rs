//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the process-wide contexts (`RwSignal<SessionState>` and
//! `RwSignal<PageState>`), registers every route with the router, and mounts
//! the pieces that must live for the whole page: the navigation guard, the
//! global 404 redirect and the provider SDK wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::signin::ProviderEvent;
use crate::components::nav_bar::NavBar;
use crate::guard::NavigationGuard;
use crate::net::api;
use crate::net::http::set_not_found_handler;
use crate::net::types::ServiceIds;
use crate::pages::home::{AboutPage, GettingStartedPage, HomePage, NotFoundPage, SigningInPage, WelcomePage};
use crate::pages::invite::InvitePage;
use crate::pages::search::SearchPage;
use crate::pages::settings::{EmailPage, NetworksPage};
use crate::pages::signin::SigninPage;
use crate::pages::teams::{TeamEditPage, TeamInvitePage, TeamNewPage, TeamShowPage, TeamsPage};
use crate::pages::tournaments::{TournamentEditPage, TournamentNewPage, TournamentShowPage, TournamentsPage};
use crate::pages::use_deferred_navigate;
use crate::pages::users::{EditProfilePage, UserShowPage, UsersPage};
use crate::routes::NOT_FOUND_PATH;
use crate::state::page::PageState;
use crate::state::session::SessionState;
use crate::util::route_scope::RouteScope;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let page = RwSignal::new(PageState::default());
    provide_context(session);
    provide_context(page);

    view! {
        <Title text=move || page.with(|p| p.title.clone())/>

        <Router>
            <NavigationGuard/>
            <NotFoundRedirect/>
            <ProviderSdks/>
            <NavBar/>
            <main>
                <Routes fallback=|| ()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("welcome") view=WelcomePage/>
                    <Route path=StaticSegment("getting-started") view=GettingStartedPage/>
                    <Route path=StaticSegment("signin") view=SigninPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=(StaticSegment("users"), ParamSegment("id")) view=UserShowPage/>
                    <Route path=StaticSegment("teams") view=TeamsPage/>
                    <Route path=(StaticSegment("teams"), StaticSegment("new")) view=TeamNewPage/>
                    <Route path=(StaticSegment("teams"), StaticSegment("edit"), ParamSegment("id")) view=TeamEditPage/>
                    <Route path=(StaticSegment("teams"), StaticSegment("invite"), ParamSegment("id")) view=TeamInvitePage/>
                    <Route path=(StaticSegment("teams"), ParamSegment("id")) view=TeamShowPage/>
                    <Route path=StaticSegment("tournaments") view=TournamentsPage/>
                    <Route path=(StaticSegment("tournaments"), StaticSegment("new")) view=TournamentNewPage/>
                    <Route
                        path=(StaticSegment("tournaments"), StaticSegment("edit"), ParamSegment("id"))
                        view=TournamentEditPage
                    />
                    <Route path=(StaticSegment("tournaments"), ParamSegment("id")) view=TournamentShowPage/>
                    <Route path=(StaticSegment("settings"), StaticSegment("edit-profile")) view=EditProfilePage/>
                    <Route path=(StaticSegment("settings"), StaticSegment("networks")) view=NetworksPage/>
                    <Route path=(StaticSegment("settings"), StaticSegment("email")) view=EmailPage/>
                    <Route path=StaticSegment("invite") view=InvitePage/>
                    <Route path=StaticSegment("404") view=NotFoundPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("twitter"), StaticSegment("callback"))
                        view=SigningInPage
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("google"), StaticSegment("callback"))
                        view=SigningInPage
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Point the transport's 404 hook at the not-found view.
#[component]
fn NotFoundRedirect() -> impl IntoView {
    let redirect = use_deferred_navigate();
    set_not_found_handler(move || {
        log::debug!("backend answered 404");
        redirect.set(Some(NOT_FOUND_PATH.to_owned()));
    });
}

/// Load the provider ids once and wire the Google+ and Facebook SDKs to
/// sign-in completion.
#[component]
fn ProviderSdks() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirect = use_deferred_navigate();
    let scope = RouteScope::attach();

    scope.load(api::service_ids(), move |result| match result {
        Ok(ids) => {
            install_sdks(&ids, move |event| complete_sdk_signin(session, redirect, event));
            session.update(|s| s.service_ids = Some(ids));
        }
        Err(err) => log::warn!("service ids unavailable: {err}"),
    });
}

fn complete_sdk_signin(session: RwSignal<SessionState>, redirect: RwSignal<Option<String>>, event: ProviderEvent) {
    // The Facebook SDK reports "connected" on every page load.
    if session.with_untracked(SessionState::is_logged_in) {
        return;
    }
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::auth::AuthService;
        use crate::auth::cookies::DefaultCookies;
        use crate::auth::signin::{apply_outcome, complete_provider_event};

        let auth = AuthService::<DefaultCookies>::default();
        let outcome = complete_provider_event(&api::HttpBackend, &auth, &event).await;
        if let Some(Some(to)) = session.try_update(|s| apply_outcome(s, outcome)) {
            redirect.set(Some(to.to_owned()));
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (redirect, event);
}

#[cfg(feature = "csr")]
fn install_sdks(ids: &ServiceIds, on_event: impl Fn(ProviderEvent) + Copy + 'static) {
    use crate::auth::sdk;

    sdk::install_google_plus_callback(on_event);
    if ids.facebook_app_id.is_empty() {
        return;
    }
    sdk::install_facebook_init(ids.facebook_app_id.clone(), on_event);
    sdk::inject_facebook_sdk();
}

#[cfg(not(feature = "csr"))]
fn install_sdks(_ids: &ServiceIds, _on_event: impl Fn(ProviderEvent) + Copy + 'static) {}
