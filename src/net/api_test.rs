use futures::executor::block_on;

use super::*;
use crate::routes::{GoogleCallback, TwitterCallback};

#[test]
fn resource_paths_put_action_before_id() {
    assert_eq!(tournaments::path("show", "42"), "tournaments/show/42");
    assert_eq!(tournaments::path("joinasteam", "42"), "tournaments/joinasteam/42");
    assert_eq!(teams::path("invite", "9"), "teams/invite/9");
}

#[test]
fn urls_are_rooted_at_the_api_base() {
    assert_eq!(url("users/show/12", &[("including", "Teams")]), "/j/users/show/12?including=Teams");
    assert_eq!(url("tournaments/", &[]), "/j/tournaments/");
}

#[test]
fn provider_user_query_carries_profile_and_provider() {
    let profile = ProviderProfile {
        id: "g-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    };
    let query = provider_user_query(Provider::GooglePlus, "tok", &profile);
    assert_eq!(
        query,
        [
            ("access_token", "tok"),
            ("provider", Provider::GooglePlus.backend_name()),
            ("id", "g-1"),
            ("name", "Ada"),
            ("email", "ada@example.com"),
        ]
    );
}

#[test]
fn requests_outside_the_browser_are_unavailable() {
    assert_eq!(block_on(users::get("12", "Teams")), Err(ApiError::Unavailable));
    assert_eq!(block_on(tournaments::reset("3")), Err(ApiError::Unavailable));
    assert_eq!(block_on(service_ids()), Err(ApiError::Unavailable));
}

#[test]
fn http_backend_surfaces_transport_errors() {
    let backend = HttpBackend;
    let twitter = TwitterCallback {
        oauth_token: "T".to_owned(),
        oauth_verifier: "V".to_owned(),
    };
    let google = GoogleCallback {
        auth_token: "G".to_owned(),
    };
    assert_eq!(block_on(backend.twitter_user(&twitter)), Err(ApiError::Unavailable));
    assert_eq!(block_on(backend.google_user(&google)), Err(ApiError::Unavailable));
    assert_eq!(
        block_on(backend.provider_profile(Provider::Facebook, "tok")),
        Err(ApiError::Unavailable)
    );
}
