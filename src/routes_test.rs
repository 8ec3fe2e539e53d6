use super::*;

fn page_id(route: &Route) -> Option<RouteId> {
    route.descriptor().map(|d| d.id)
}

fn param(route: &Route) -> Option<&str> {
    match route {
        Route::Page { param, .. } => param.as_deref(),
        _ => None,
    }
}

#[test]
fn every_registered_literal_pattern_resolves_to_itself() {
    for descriptor in ROUTES.iter().filter(|d| !d.pattern.contains(':')) {
        let route = resolve(descriptor.pattern, "");
        assert_eq!(page_id(&route), Some(descriptor.id), "pattern {}", descriptor.pattern);
    }
}

#[test]
fn literal_segments_win_over_parameters() {
    assert_eq!(page_id(&resolve("/teams/new", "")), Some(RouteId::TeamNew));
    assert_eq!(page_id(&resolve("/tournaments/new", "")), Some(RouteId::TournamentNew));
}

#[test]
fn parameter_segment_is_captured() {
    let route = resolve("/tournaments/42", "");
    assert_eq!(page_id(&route), Some(RouteId::TournamentShow));
    assert_eq!(param(&route), Some("42"));

    let route = resolve("/teams/edit/7", "");
    assert_eq!(page_id(&route), Some(RouteId::TeamEdit));
    assert_eq!(param(&route), Some("7"));

    let route = resolve("/teams/invite/9", "");
    assert_eq!(page_id(&route), Some(RouteId::TeamInvite));
    assert_eq!(param(&route), Some("9"));

    let route = resolve("/users/3", "");
    assert_eq!(page_id(&route), Some(RouteId::UserShow));
    assert_eq!(param(&route), Some("3"));
}

#[test]
fn users_index_accepts_with_and_without_trailing_slash() {
    assert_eq!(page_id(&resolve("/users/", "")), Some(RouteId::Users));
    assert_eq!(page_id(&resolve("/users", "")), Some(RouteId::Users));
}

#[test]
fn unknown_paths_redirect_to_root() {
    assert_eq!(resolve("/nowhere", ""), Route::Redirect { to: ROOT_PATH });
    assert_eq!(resolve("/teams/1/extra", ""), Route::Redirect { to: ROOT_PATH });
}

#[test]
fn access_rules_follow_route_table() {
    for public in ["/welcome", "/getting-started", "/signin", "/about"] {
        assert!(!resolve(public, "").requires_login(), "{public}");
    }
    for guarded in [
        "/",
        "/search",
        "/users/",
        "/users/1",
        "/teams",
        "/teams/new",
        "/teams/1",
        "/teams/edit/1",
        "/teams/invite/1",
        "/tournaments",
        "/tournaments/new",
        "/tournaments/1",
        "/tournaments/edit/1",
        "/settings/edit-profile",
        "/settings/networks",
        "/settings/email",
        "/invite",
    ] {
        assert!(resolve(guarded, "").requires_login(), "{guarded}");
    }
    let not_found = resolve("/404", "");
    assert_eq!(not_found.descriptor().map(|d| d.access), Some(Access::Unguarded));
    assert!(!not_found.requires_login());
}

#[test]
fn only_welcome_and_signin_are_guest_only() {
    let guest_only: Vec<RouteId> = ROUTES.iter().filter(|d| d.is_guest_only()).map(|d| d.id).collect();
    assert_eq!(guest_only, vec![RouteId::Welcome, RouteId::SignIn]);
}

#[test]
fn tournament_show_keeps_view_on_search_changes() {
    assert!(!descriptor(RouteId::TournamentShow).reload_on_search);
    assert!(descriptor(RouteId::Tournaments).reload_on_search);
}

#[test]
fn twitter_callback_carries_token_and_verifier() {
    let route = resolve(TWITTER_CALLBACK_PATH, "?oauth_token=T&oauth_verifier=V");
    assert_eq!(
        route,
        Route::TwitterCallback(TwitterCallback {
            oauth_token: "T".to_owned(),
            oauth_verifier: "V".to_owned(),
        })
    );
    assert!(!route.requires_login());
}

#[test]
fn google_callback_carries_auth_token() {
    let route = resolve(GOOGLE_CALLBACK_PATH, "auth_token=abc%2F123");
    assert_eq!(
        route,
        Route::GoogleCallback(GoogleCallback {
            auth_token: "abc/123".to_owned(),
        })
    );
}

#[test]
fn callback_with_missing_parameters_yields_empty_values() {
    let route = resolve(TWITTER_CALLBACK_PATH, "");
    assert_eq!(
        route,
        Route::TwitterCallback(TwitterCallback {
            oauth_token: String::new(),
            oauth_verifier: String::new(),
        })
    );
}

#[test]
fn page_titles_follow_static_pages() {
    assert_eq!(page_title("/welcome"), "gonawin");
    assert_eq!(page_title("/signin"), "gonawin - Sign In");
    assert_eq!(page_title("/about"), "gonawin - About");
    assert_eq!(page_title("/getting-started"), "gonawin - Getting Started");
    assert_eq!(page_title("/tournaments/3"), DEFAULT_TITLE);
}

#[test]
fn query_param_returns_first_decoded_value() {
    assert_eq!(query_param("?q=copa+america&q=other", "q"), Some("copa america".to_owned()));
    assert_eq!(query_param("q=x", "missing"), None);
}
