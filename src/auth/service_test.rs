use super::*;
use crate::auth::cookies::MemoryCookies;

fn service() -> (AuthService<MemoryCookies>, MemoryCookies) {
    let jar = MemoryCookies::default();
    (AuthService::new(jar.clone()), jar)
}

#[test]
fn logged_out_without_cookies() {
    let (auth, _) = service();
    assert!(!auth.is_logged_in());
    assert_eq!(auth.user_id(), None);
}

#[test]
fn store_cookies_logs_in() {
    let (auth, jar) = service();
    auth.store_cookies("ya29", "tok", "12");
    assert!(auth.is_logged_in());
    assert_eq!(auth.user_id(), Some("12".to_owned()));
    assert_eq!(auth.auth_token(), Some("tok".to_owned()));
    assert_eq!(jar.get(ACCESS_TOKEN_COOKIE), Some("ya29".to_owned()));
}

#[test]
fn empty_auth_token_is_not_a_session() {
    let (auth, _) = service();
    auth.store_cookies("ya29", "", "12");
    assert!(!auth.is_logged_in());
}

#[test]
fn login_state_is_read_fresh_from_the_jar() {
    let (auth, jar) = service();
    auth.store_cookies("a", "tok", "12");
    jar.remove(USER_ID_COOKIE);
    assert!(!auth.is_logged_in());
}

#[test]
fn provider_round_trips_through_cookie() {
    let (auth, jar) = service();
    auth.set_provider(Provider::GooglePlus);
    assert_eq!(jar.get(PROVIDER_COOKIE), Some("google_plus".to_owned()));
    assert_eq!(auth.provider(), Some(Provider::GooglePlus));
}

#[test]
fn clear_removes_every_auth_cookie() {
    let (auth, jar) = service();
    auth.store_cookies("a", "tok", "12");
    auth.set_provider(Provider::Twitter);
    auth.clear();
    assert!(!auth.is_logged_in());
    assert_eq!(jar.get(ACCESS_TOKEN_COOKIE), None);
    assert_eq!(jar.get(PROVIDER_COOKIE), None);
}

#[test]
fn backend_names_collapse_google_variants() {
    assert_eq!(Provider::GooglePlus.backend_name(), "google");
    assert_eq!(Provider::Google.backend_name(), "google");
    assert_eq!(Provider::from_cookie_value("myspace"), None);
}
