use super::*;

#[test]
fn parse_cookie_finds_named_value_among_others() {
    let header = "_ga=GA1.2.3; auth=abc123; user_id=42";
    assert_eq!(parse_cookie(header, "auth"), Some("abc123".to_owned()));
    assert_eq!(parse_cookie(header, "user_id"), Some("42".to_owned()));
    assert_eq!(parse_cookie(header, "provider"), None);
}

#[test]
fn parse_cookie_ignores_prefix_matches() {
    assert_eq!(parse_cookie("xauth=1; auth_extra=2", "auth"), None);
}

#[test]
fn parse_cookie_tolerates_empty_header() {
    assert_eq!(parse_cookie("", "auth"), None);
    assert_eq!(parse_cookie(" ; ", "auth"), None);
}

#[test]
fn encoded_cookie_round_trips_through_parse() {
    let assignment = encode_cookie("access_token", "ya29/a+b c");
    let pair = assignment.split(';').next().expect("name=value pair");
    assert_eq!(parse_cookie(pair, "access_token"), Some("ya29/a+b c".to_owned()));
    assert!(assignment.ends_with("; path=/"));
}

#[test]
fn expire_cookie_sets_epoch_expiry() {
    assert_eq!(
        expire_cookie("auth"),
        "auth=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
}

#[test]
fn memory_cookies_set_get_remove() {
    let jar = MemoryCookies::default();
    assert_eq!(jar.get("auth"), None);
    jar.set("auth", "tok");
    assert_eq!(jar.get("auth"), Some("tok".to_owned()));
    jar.remove("auth");
    assert_eq!(jar.get("auth"), None);
}

#[test]
fn memory_cookie_clones_share_storage() {
    let jar = MemoryCookies::default();
    let other = jar.clone();
    jar.set("provider", "twitter");
    assert_eq!(other.get("provider"), Some("twitter".to_owned()));
}
