use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::auth::cookies::MemoryCookies;
use crate::auth::service::{AUTH_COOKIE, PROVIDER_COOKIE, USER_ID_COOKIE};
use crate::net::types::{GPlusEmail, User};

#[derive(Default)]
struct FakeBackend {
    calls: RefCell<Vec<String>>,
    profile: Option<ProviderProfile>,
    user: Option<UserEnvelope>,
}

impl FakeBackend {
    fn succeeding() -> Self {
        Self {
            profile: Some(ProviderProfile {
                id: "g-1".to_owned(),
                name: "Santiago".to_owned(),
                email: "s@example.com".to_owned(),
            }),
            user: Some(user_envelope(12, "tok")),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn user_result(&self) -> Result<UserEnvelope, ApiError> {
        self.user.clone().ok_or(ApiError::Status {
            status: 400,
            body: "denied".to_owned(),
        })
    }
}

impl AuthBackend for FakeBackend {
    async fn twitter_user(&self, callback: &TwitterCallback) -> Result<UserEnvelope, ApiError> {
        self.record(format!("twitter:{}:{}", callback.oauth_token, callback.oauth_verifier));
        self.user_result()
    }

    async fn google_user(&self, callback: &GoogleCallback) -> Result<UserEnvelope, ApiError> {
        self.record(format!("google:{}", callback.auth_token));
        self.user_result()
    }

    async fn provider_profile(&self, provider: Provider, access_token: &str) -> Result<ProviderProfile, ApiError> {
        self.record(format!("profile:{}:{access_token}", provider.cookie_value()));
        self.profile.clone().ok_or(ApiError::Network("offline".to_owned()))
    }

    async fn provider_user(
        &self,
        provider: Provider,
        access_token: &str,
        profile: &ProviderProfile,
    ) -> Result<UserEnvelope, ApiError> {
        self.record(format!(
            "user:{}:{access_token}:{}:{}:{}",
            provider.backend_name(),
            profile.id,
            profile.name,
            profile.email
        ));
        self.user_result()
    }
}

fn user_envelope(id: i64, auth: &str) -> UserEnvelope {
    UserEnvelope {
        user: User {
            id,
            auth: auth.to_owned(),
            ..User::default()
        },
        ..UserEnvelope::default()
    }
}

fn auth_service() -> (AuthService<MemoryCookies>, MemoryCookies) {
    let jar = MemoryCookies::default();
    (AuthService::new(jar.clone()), jar)
}

fn twitter(token: &str, verifier: &str) -> TwitterCallback {
    TwitterCallback {
        oauth_token: token.to_owned(),
        oauth_verifier: verifier.to_owned(),
    }
}

#[test]
fn twitter_completion_passes_token_and_verifier_through() {
    let backend = FakeBackend::succeeding();
    let (auth, jar) = auth_service();

    let outcome = block_on(complete_twitter(&backend, &auth, &twitter("T", "V")));

    assert!(matches!(outcome, SigninOutcome::SignedIn(_)));
    assert_eq!(*backend.calls.borrow(), vec!["twitter:T:V".to_owned()]);
    assert_eq!(jar.get(PROVIDER_COOKIE), Some("twitter".to_owned()));
    assert_eq!(jar.get(USER_ID_COOKIE), Some("12".to_owned()));
}

#[test]
fn twitter_completion_without_verifier_skips_backend() {
    let backend = FakeBackend::succeeding();
    let (auth, _) = auth_service();

    let outcome = block_on(complete_twitter(&backend, &auth, &twitter("T", "")));

    assert_eq!(outcome, SigninOutcome::Declined(DeclineReason::MissingCallbackParams));
    assert!(backend.calls.borrow().is_empty());
    assert!(!auth.is_logged_in());
}

#[test]
fn google_completion_stores_google_provider() {
    let backend = FakeBackend::succeeding();
    let (auth, jar) = auth_service();
    let callback = GoogleCallback {
        auth_token: "G".to_owned(),
    };

    let outcome = block_on(complete_google(&backend, &auth, &callback));

    assert!(matches!(outcome, SigninOutcome::SignedIn(_)));
    assert_eq!(*backend.calls.borrow(), vec!["google:G".to_owned()]);
    assert_eq!(jar.get(PROVIDER_COOKIE), Some("google".to_owned()));
}

#[test]
fn google_plus_success_signs_in_and_navigates_home() {
    let backend = FakeBackend::succeeding();
    let (auth, jar) = auth_service();
    let event = ProviderEvent::Success {
        provider: Provider::GooglePlus,
        access_token: "A".to_owned(),
    };
    let mut session = SessionState::default();

    let outcome = block_on(complete_provider_event(&backend, &auth, &event));
    let target = apply_outcome(&mut session, outcome);

    assert_eq!(target, Some("/"));
    assert!(session.is_logged_in());
    assert_eq!(session.user().map(|u| u.user.id), Some(12));
    assert_eq!(jar.get(PROVIDER_COOKIE), Some("google_plus".to_owned()));
    assert_eq!(jar.get(AUTH_COOKIE), Some("tok".to_owned()));
    assert_eq!(
        *backend.calls.borrow(),
        vec![
            "profile:google_plus:A".to_owned(),
            "user:google:A:g-1:Santiago:s@example.com".to_owned(),
        ]
    );
}

#[test]
fn failed_provider_event_changes_nothing() {
    let backend = FakeBackend::succeeding();
    let (auth, jar) = auth_service();
    let event = ProviderEvent::Failure {
        provider: Provider::GooglePlus,
        reason: "access_denied".to_owned(),
    };
    let mut session = SessionState::default();

    let outcome = block_on(complete_provider_event(&backend, &auth, &event));
    let target = apply_outcome(&mut session, outcome);

    assert_eq!(target, None);
    assert!(!session.is_logged_in());
    assert!(!session.has_user());
    assert_eq!(jar.get(PROVIDER_COOKIE), None);
    assert!(backend.calls.borrow().is_empty());
}

#[test]
fn backend_failure_is_declined_without_cookies() {
    let backend = FakeBackend::failing();
    let (auth, _) = auth_service();
    let event = ProviderEvent::Success {
        provider: Provider::Facebook,
        access_token: "F".to_owned(),
    };

    let outcome = block_on(complete_provider_event(&backend, &auth, &event));

    assert_eq!(
        outcome,
        SigninOutcome::Declined(DeclineReason::Backend(ApiError::Network("offline".to_owned())))
    );
    assert!(!auth.is_logged_in());
}

#[test]
fn user_without_session_token_is_declined() {
    let backend = FakeBackend {
        user: Some(user_envelope(12, "")),
        ..FakeBackend::succeeding()
    };
    let (auth, _) = auth_service();

    let outcome = block_on(complete_twitter(&backend, &auth, &twitter("T", "V")));

    assert_eq!(outcome, SigninOutcome::Declined(DeclineReason::MissingSessionToken));
    assert!(!auth.is_logged_in());
}

#[test]
fn profile_without_email_is_declined() {
    let backend = FakeBackend {
        profile: Some(ProviderProfile {
            id: "g-1".to_owned(),
            ..ProviderProfile::default()
        }),
        ..FakeBackend::succeeding()
    };
    let (auth, _) = auth_service();
    let event = ProviderEvent::Success {
        provider: Provider::GooglePlus,
        access_token: "A".to_owned(),
    };

    let outcome = block_on(complete_provider_event(&backend, &auth, &event));

    assert_eq!(outcome, SigninOutcome::Declined(DeclineReason::ProfileIncomplete));
    assert_eq!(backend.calls.borrow().len(), 1);
}

#[test]
fn gplus_info_maps_to_profile_with_first_email() {
    let info = GPlusUserInfo {
        id: "g-1".to_owned(),
        display_name: "Santiago".to_owned(),
        emails: vec![
            GPlusEmail {
                value: "first@example.com".to_owned(),
            },
            GPlusEmail {
                value: "second@example.com".to_owned(),
            },
        ],
    };
    let profile = ProviderProfile::from(info);
    assert_eq!(profile.name, "Santiago");
    assert_eq!(profile.email, "first@example.com");
}

#[test]
fn declined_twitter_callback_leaves_for_welcome() {
    let backend = FakeBackend::succeeding();
    let (auth, _) = auth_service();
    let mut session = SessionState::default();

    let outcome = block_on(complete_twitter(&backend, &auth, &twitter("", "")));
    let target = apply_callback_outcome(&mut session, outcome);

    assert_eq!(target, "/welcome");
    assert!(!session.is_logged_in());
    assert!(backend.calls.borrow().is_empty());
}

#[test]
fn google_callback_rejected_by_backend_leaves_for_welcome() {
    let backend = FakeBackend::failing();
    let (auth, jar) = auth_service();
    let mut session = SessionState::default();
    let callback = GoogleCallback {
        auth_token: "G".to_owned(),
    };

    let outcome = block_on(complete_google(&backend, &auth, &callback));
    let target = apply_callback_outcome(&mut session, outcome);

    assert_eq!(target, "/welcome");
    assert!(!session.has_user());
    assert_eq!(jar.get(AUTH_COOKIE), None);
}

#[test]
fn accepted_callback_goes_home() {
    let backend = FakeBackend::succeeding();
    let (auth, _) = auth_service();
    let mut session = SessionState::default();

    let outcome = block_on(complete_twitter(&backend, &auth, &twitter("T", "V")));

    assert_eq!(apply_callback_outcome(&mut session, outcome), "/");
    assert!(session.is_logged_in());
}
