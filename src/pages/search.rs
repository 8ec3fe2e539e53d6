//! Combined search over tournaments, teams and users.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::messages::{MessageAlerts, Messages};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::SearchResults;
use crate::util::route_scope::RouteScope;

/// Path of the search page for `q`.
pub fn search_href(q: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", q)
        .finish();
    format!("/search?{query}")
}

/// Message shown when nothing matched.
pub fn no_results_message(q: &str, results: &SearchResults) -> Option<String> {
    let empty = results.tournaments.is_empty() && results.teams.is_empty() && results.users.is_empty();
    empty.then(|| format!("No results found for \"{q}\"."))
}

async fn search_all(q: String) -> Result<SearchResults, ApiError> {
    let tournaments = api::tournaments::search(&q).await?;
    let teams = api::teams::search(&q).await?;
    let users = api::users::search(&q).await?;
    Ok(SearchResults {
        users: users.users,
        teams: teams.teams,
        tournaments: tournaments.tournaments,
        message_info: tournaments.message_info,
    })
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let q = Memo::new(move |_| query.with(|m| m.get("q").unwrap_or_default()));
    let results = RwSignal::new(None::<SearchResults>);
    let messages = Messages::default();
    let scope = RouteScope::attach();

    Effect::new(move || {
        let q = q.get();
        results.set(None);
        messages.clear();
        if q.trim().is_empty() {
            return;
        }
        let shown = q.clone();
        scope.load(search_all(q), move |result| match result {
            Ok(found) => {
                messages.info(no_results_message(&shown, &found).as_deref());
                results.set(Some(found));
            }
            Err(err) => messages.fail(&err),
        });
    });

    view! {
        <div class="container">
            <h2>"Search: " {move || q.get()}</h2>
            <MessageAlerts messages=messages/>
            {move || {
                results
                    .get()
                    .map(|found| {
                        view! {
                            <h3>"Tournaments"</h3>
                            <ul>
                                {found
                                    .tournaments
                                    .into_iter()
                                    .map(|t| view! { <li><a href=format!("/tournaments/{}", t.id)>{t.name}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <h3>"Teams"</h3>
                            <ul>
                                {found
                                    .teams
                                    .into_iter()
                                    .map(|t| view! { <li><a href=format!("/teams/{}", t.id)>{t.name}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <h3>"Users"</h3>
                            <ul>
                                {found
                                    .users
                                    .into_iter()
                                    .map(|u| {
                                        let name = u.display_name().to_owned();
                                        view! { <li><a href=format!("/users/{}", u.id)>{name}</a></li> }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })
            }}
        </div>
    }
}
