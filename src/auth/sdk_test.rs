use super::*;

#[test]
fn facebook_connected_with_token_is_success() {
    assert_eq!(
        facebook_status_event("connected", Some("fb-token".to_owned())),
        Some(ProviderEvent::Success {
            provider: Provider::Facebook,
            access_token: "fb-token".to_owned(),
        })
    );
}

#[test]
fn facebook_other_statuses_are_ignored() {
    assert_eq!(facebook_status_event("not_authorized", None), None);
    assert_eq!(facebook_status_event("unknown", Some("t".to_owned())), None);
}

#[test]
fn facebook_connected_without_token_is_failure() {
    assert!(matches!(
        facebook_status_event("connected", Some(String::new())),
        Some(ProviderEvent::Failure { .. })
    ));
}

#[test]
fn google_plus_token_is_success() {
    assert_eq!(
        google_plus_event(Some("A".to_owned()), None),
        ProviderEvent::Success {
            provider: Provider::GooglePlus,
            access_token: "A".to_owned(),
        }
    );
}

#[test]
fn google_plus_error_wins_over_token() {
    assert_eq!(
        google_plus_event(Some("A".to_owned()), Some("access_denied".to_owned())),
        ProviderEvent::Failure {
            provider: Provider::GooglePlus,
            reason: "access_denied".to_owned(),
        }
    );
}

#[test]
fn google_plus_without_token_or_error_is_failure() {
    assert!(matches!(google_plus_event(None, None), ProviderEvent::Failure { .. }));
}
