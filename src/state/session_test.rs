use super::*;
use crate::net::types::User;

fn envelope(id: i64) -> UserEnvelope {
    UserEnvelope {
        user: User {
            id,
            username: "rjourde".to_owned(),
            auth: "tok".to_owned(),
            ..User::default()
        },
        ..UserEnvelope::default()
    }
}

#[test]
fn new_session_is_signed_out_without_user() {
    let session = SessionState::default();
    assert!(!session.is_logged_in());
    assert!(!session.has_user());
    assert_eq!(session.user(), None);
}

#[test]
fn begin_user_fetch_requires_login() {
    let mut session = SessionState::default();
    assert_eq!(session.begin_user_fetch(), None);
}

#[test]
fn begin_user_fetch_claims_slot_once() {
    let mut session = SessionState::default();
    session.set_logged_in(true);
    let ticket = session.begin_user_fetch().expect("first fetch");
    assert_eq!(session.current_user(), &UserSlot::Pending(ticket));
    assert!(session.has_user());
    assert_eq!(session.begin_user_fetch(), None);
}

#[test]
fn finish_user_fetch_stores_user() {
    let mut session = SessionState::default();
    session.set_logged_in(true);
    let ticket = session.begin_user_fetch().expect("ticket");
    let resolution = session.finish_user_fetch::<()>(ticket, Ok(envelope(12)));
    assert_eq!(resolution, FetchResolution::Applied);
    assert_eq!(session.user().map(|u| u.user.id), Some(12));
}

#[test]
fn failed_fetch_signs_out() {
    let mut session = SessionState::default();
    session.set_logged_in(true);
    let ticket = session.begin_user_fetch().expect("ticket");
    let resolution = session.finish_user_fetch(ticket, Err("boom"));
    assert_eq!(resolution, FetchResolution::SignedOut);
    assert!(!session.is_logged_in());
    assert!(!session.has_user());
}

#[test]
fn result_after_sign_out_is_discarded() {
    let mut session = SessionState::default();
    session.set_logged_in(true);
    let ticket = session.begin_user_fetch().expect("ticket");
    session.sign_out();
    let resolution = session.finish_user_fetch::<()>(ticket, Ok(envelope(12)));
    assert_eq!(resolution, FetchResolution::Stale);
    assert!(!session.has_user());
}

#[test]
fn result_of_superseded_fetch_is_discarded() {
    let mut session = SessionState::default();
    session.set_logged_in(true);
    let first = session.begin_user_fetch().expect("first");
    session.set_logged_in(false);
    session.set_logged_in(true);
    let second = session.begin_user_fetch().expect("second");
    assert_ne!(first, second);

    assert_eq!(session.finish_user_fetch::<()>(first, Ok(envelope(1))), FetchResolution::Stale);
    assert_eq!(session.finish_user_fetch::<()>(second, Ok(envelope(2))), FetchResolution::Applied);
    assert_eq!(session.user().map(|u| u.user.id), Some(2));
}

#[test]
fn sign_in_overrides_pending_fetch() {
    let mut session = SessionState::default();
    session.set_logged_in(true);
    let ticket = session.begin_user_fetch().expect("ticket");
    session.sign_in(envelope(7));
    assert_eq!(session.finish_user_fetch::<()>(ticket, Ok(envelope(8))), FetchResolution::Stale);
    assert_eq!(session.user().map(|u| u.user.id), Some(7));
}

#[test]
fn logging_out_drops_user() {
    let mut session = SessionState::default();
    session.sign_in(envelope(7));
    session.set_logged_in(false);
    assert_eq!(session.current_user(), &UserSlot::Absent);
}

#[test]
fn sign_out_keeps_service_ids() {
    let mut session = SessionState {
        service_ids: Some(ServiceIds {
            facebook_app_id: "fb".to_owned(),
            ..ServiceIds::default()
        }),
        ..SessionState::default()
    };
    session.sign_in(envelope(1));
    session.sign_out();
    assert_eq!(session.service_ids.as_ref().map(|ids| ids.facebook_app_id.as_str()), Some("fb"));
}

#[test]
fn profile_update_keeps_related_collections() {
    let mut session = SessionState::default();
    let mut loaded = envelope(7);
    loaded.teams.push(Default::default());
    session.sign_in(loaded);

    let mut edited = envelope(7).user;
    edited.alias = "ace".to_owned();
    session.update_profile(edited);

    let user = session.user().expect("loaded user");
    assert_eq!(user.user.alias, "ace");
    assert_eq!(user.teams.len(), 1);
}

#[test]
fn profile_update_without_user_is_ignored() {
    let mut session = SessionState::default();
    session.update_profile(envelope(7).user);
    assert!(!session.has_user());
}
