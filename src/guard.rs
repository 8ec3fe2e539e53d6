//! Navigation guard evaluated on every route change.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`evaluate`] is the decision: given the session, the resolved target and a
//! fresh reading of the auth cookies, it updates the session and says whether
//! to proceed, redirect, or hand an OAuth callback to sign-in completion. The
//! [`NavigationGuard`] component runs it whenever the router location changes
//! and executes the returned effects.
//!
//! DESIGN
//! ======
//! Branches are checked in a fixed order and the first match wins:
//! 1. refresh login status from the auth service;
//! 2. Twitter callback → complete Twitter sign-in, nothing else;
//! 3. Google callback → complete Google sign-in, nothing else;
//! 4. ordinary navigation: start the current-user fetch if needed, bounce
//!    signed-in users off guest-only routes, and send requests for
//!    login-required routes without a user to the welcome page.
//!
//! The current-user fetch is fire-and-forget; a pending fetch counts as a
//! present user, so navigation is never held up by it. A location change
//! that only swaps the query string of a route with `reload_on_search`
//! unset is not evaluated again.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::AuthService;
use crate::auth::cookies::{CookieJar, DefaultCookies};
use crate::net::types::CURRENT_USER_INCLUDES;
use crate::routes::{self, GoogleCallback, ROOT_PATH, Route, TwitterCallback, WELCOME_PATH};
use crate::state::page::PageState;
use crate::state::session::{FetchTicket, SessionState};

/// Login status read from the auth service at the start of a navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub logged_in: bool,
    pub user_id: Option<String>,
}

impl AuthSnapshot {
    pub fn read<C: CookieJar>(auth: &AuthService<C>) -> Self {
        Self {
            logged_in: auth.is_logged_in(),
            user_id: auth.user_id(),
        }
    }
}

/// What the navigation should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardAction {
    Proceed,
    Redirect(&'static str),
    CompleteTwitter(TwitterCallback),
    CompleteGoogle(GoogleCallback),
}

/// Request for the current user, issued by the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFetch {
    pub ticket: FetchTicket,
    pub user_id: String,
    pub including: &'static str,
}

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    pub action: GuardAction,
    pub fetch_user: Option<UserFetch>,
}

impl GuardDecision {
    fn action(action: GuardAction) -> Self {
        Self {
            action,
            fetch_user: None,
        }
    }
}

/// Decide what happens to a navigation towards `next`.
pub fn evaluate(session: &mut SessionState, next: &Route, auth: &AuthSnapshot) -> GuardDecision {
    session.set_logged_in(auth.logged_in);

    match next {
        Route::TwitterCallback(callback) => {
            return GuardDecision::action(GuardAction::CompleteTwitter(callback.clone()));
        }
        Route::GoogleCallback(callback) => {
            return GuardDecision::action(GuardAction::CompleteGoogle(callback.clone()));
        }
        Route::Redirect { to } => return GuardDecision::action(GuardAction::Redirect(*to)),
        Route::Page { .. } => {}
    }

    let fetch_user = match auth.user_id.as_ref() {
        Some(user_id) => session.begin_user_fetch().map(|ticket| UserFetch {
            ticket,
            user_id: user_id.clone(),
            including: CURRENT_USER_INCLUDES,
        }),
        None => None,
    };

    let action = if next.is_guest_only() && session.is_logged_in() {
        GuardAction::Redirect(ROOT_PATH)
    } else if next.requires_login() && (!session.has_user() || !session.is_logged_in()) {
        GuardAction::Redirect(WELCOME_PATH)
    } else {
        GuardAction::Proceed
    };

    GuardDecision { action, fetch_user }
}

/// Runs [`evaluate`] on every location change. Must be rendered inside the
/// `<Router>`.
#[component]
pub fn NavigationGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let page = expect_context::<RwSignal<PageState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        let query = location.search.get();
        let next = routes::resolve(&path, &query);
        if is_search_only_change(previous.as_deref(), &path, &next) {
            log::debug!("query change on {path}: guard skipped");
            return path;
        }
        page.update(|p| routes::page_title(&path).clone_into(&mut p.title));

        let auth = AuthService::<DefaultCookies>::default();
        let snapshot = AuthSnapshot::read(&auth);
        let Some(decision) = session.try_update(|s| evaluate(s, &next, &snapshot)) else {
            return path;
        };
        log::debug!(
            "navigation to {path}: logged_in={} action={:?}",
            snapshot.logged_in,
            decision.action
        );

        if let Some(fetch) = decision.fetch_user {
            spawn_user_fetch(session, auth.clone(), fetch);
        }
        match decision.action {
            GuardAction::Proceed => {}
            GuardAction::Redirect(to) => navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            ),
            completion @ (GuardAction::CompleteTwitter(_) | GuardAction::CompleteGoogle(_)) => {
                spawn_callback_completion(session, auth, completion, navigate.clone());
            }
        }
        path
    });
}

/// Whether a location change kept the path and only changed the query string
/// of a route whose descriptor keeps its view on search changes.
pub fn is_search_only_change(previous_path: Option<&str>, path: &str, next: &Route) -> bool {
    previous_path == Some(path) && next.descriptor().is_some_and(|d| !d.reload_on_search)
}

#[cfg(feature = "csr")]
fn spawn_user_fetch(session: RwSignal<SessionState>, auth: AuthService, fetch: UserFetch) {
    use crate::state::session::FetchResolution;

    leptos::task::spawn_local(async move {
        let result = crate::net::api::users::get(&fetch.user_id, fetch.including).await;
        if let Err(err) = &result {
            log::warn!("current user fetch failed: {err}");
        }
        let resolution = session.try_update(|s| s.finish_user_fetch(fetch.ticket, result));
        if resolution == Some(FetchResolution::SignedOut) {
            auth.clear();
        }
    });
}

#[cfg(not(feature = "csr"))]
fn spawn_user_fetch(_session: RwSignal<SessionState>, _auth: AuthService, _fetch: UserFetch) {}

#[cfg(feature = "csr")]
fn spawn_callback_completion<N>(session: RwSignal<SessionState>, auth: AuthService, completion: GuardAction, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    use crate::auth::signin::{apply_callback_outcome, complete_google, complete_twitter};
    use crate::net::api::HttpBackend;

    leptos::task::spawn_local(async move {
        let outcome = match &completion {
            GuardAction::CompleteTwitter(callback) => complete_twitter(&HttpBackend, &auth, callback).await,
            GuardAction::CompleteGoogle(callback) => complete_google(&HttpBackend, &auth, callback).await,
            GuardAction::Proceed | GuardAction::Redirect(_) => return,
        };
        if let Some(to) = session.try_update(|s| apply_callback_outcome(s, outcome)) {
            navigate(to, NavigateOptions::default());
        }
    });
}

#[cfg(not(feature = "csr"))]
fn spawn_callback_completion<N>(_session: RwSignal<SessionState>, _auth: AuthService, _completion: GuardAction, _navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
}
