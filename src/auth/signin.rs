//! OAuth sign-in completion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three entry points finish a sign-in: the Twitter and Google redirect
//! callbacks (handed over by the navigation guard) and the success event of a
//! provider JS SDK (Google+ button, Facebook). Each exchanges provider
//! credentials with the backend for a local user and session token, stores
//! the cookies, and reports a [`SigninOutcome`].
//!
//! ERROR HANDLING
//! ==============
//! Failures never surface to the user. They produce
//! [`SigninOutcome::Declined`], which leaves the session and the current
//! route untouched so the user can simply try again.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use super::cookies::CookieJar;
use super::service::{AuthService, Provider};
use crate::error::ApiError;
use crate::net::types::{GPlusUserInfo, UserEnvelope};
use crate::routes::{GoogleCallback, ROOT_PATH, TwitterCallback, WELCOME_PATH};
use crate::state::session::SessionState;

/// Identity resolved from a provider access token.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ProviderProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<GPlusUserInfo> for ProviderProfile {
    fn from(info: GPlusUserInfo) -> Self {
        let email = info.primary_email().unwrap_or_default().to_owned();
        Self {
            id: info.id,
            name: info.display_name,
            email,
        }
    }
}

/// Event emitted by a provider SDK sign-in widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    Success { provider: Provider, access_token: String },
    Failure { provider: Provider, reason: String },
}

/// Why a sign-in attempt did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclineReason {
    #[error("callback is missing its oauth parameters")]
    MissingCallbackParams,
    #[error("provider refused authorization: {0}")]
    ProviderRejected(String),
    #[error("provider profile is incomplete")]
    ProfileIncomplete,
    #[error("backend user has no session token")]
    MissingSessionToken,
    #[error(transparent)]
    Backend(#[from] ApiError),
}

/// Result of a sign-in attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SigninOutcome {
    SignedIn(Box<UserEnvelope>),
    /// Accepted no-op: nothing changes and the user stays where they are.
    Declined(DeclineReason),
}

/// Backend calls needed to complete a sign-in.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Exchange a Twitter request token and verifier for a local user.
    async fn twitter_user(&self, callback: &TwitterCallback) -> Result<UserEnvelope, ApiError>;

    /// Exchange a Google redirect-flow token for a local user.
    async fn google_user(&self, callback: &GoogleCallback) -> Result<UserEnvelope, ApiError>;

    /// Resolve the provider profile behind `access_token`.
    async fn provider_profile(&self, provider: Provider, access_token: &str) -> Result<ProviderProfile, ApiError>;

    /// Find or create the local user for a provider profile.
    async fn provider_user(
        &self,
        provider: Provider,
        access_token: &str,
        profile: &ProviderProfile,
    ) -> Result<UserEnvelope, ApiError>;
}

/// Finish the Twitter redirect flow.
pub async fn complete_twitter<B: AuthBackend, C: CookieJar>(
    backend: &B,
    auth: &AuthService<C>,
    callback: &TwitterCallback,
) -> SigninOutcome {
    if callback.oauth_token.is_empty() || callback.oauth_verifier.is_empty() {
        return SigninOutcome::Declined(DeclineReason::MissingCallbackParams);
    }
    match backend.twitter_user(callback).await {
        Ok(user) => finish(auth, Provider::Twitter, &callback.oauth_token, user),
        Err(err) => SigninOutcome::Declined(err.into()),
    }
}

/// Finish the Google redirect flow.
pub async fn complete_google<B: AuthBackend, C: CookieJar>(
    backend: &B,
    auth: &AuthService<C>,
    callback: &GoogleCallback,
) -> SigninOutcome {
    if callback.auth_token.is_empty() {
        return SigninOutcome::Declined(DeclineReason::MissingCallbackParams);
    }
    match backend.google_user(callback).await {
        Ok(user) => finish(auth, Provider::Google, &callback.auth_token, user),
        Err(err) => SigninOutcome::Declined(err.into()),
    }
}

/// Finish a sign-in reported by a provider SDK.
pub async fn complete_provider_event<B: AuthBackend, C: CookieJar>(
    backend: &B,
    auth: &AuthService<C>,
    event: &ProviderEvent,
) -> SigninOutcome {
    let (provider, access_token) = match event {
        ProviderEvent::Success { provider, access_token } => (*provider, access_token.as_str()),
        ProviderEvent::Failure { reason, .. } => {
            return SigninOutcome::Declined(DeclineReason::ProviderRejected(reason.clone()));
        }
    };
    match exchange_provider_token(backend, provider, access_token).await {
        Ok(user) => finish(auth, provider, access_token, user),
        Err(reason) => SigninOutcome::Declined(reason),
    }
}

async fn exchange_provider_token<B: AuthBackend>(
    backend: &B,
    provider: Provider,
    access_token: &str,
) -> Result<UserEnvelope, DeclineReason> {
    let profile = backend.provider_profile(provider, access_token).await?;
    if profile.id.is_empty() || profile.email.is_empty() {
        return Err(DeclineReason::ProfileIncomplete);
    }
    Ok(backend.provider_user(provider, access_token, &profile).await?)
}

fn finish<C: CookieJar>(auth: &AuthService<C>, provider: Provider, access_token: &str, user: UserEnvelope) -> SigninOutcome {
    if user.user.auth.is_empty() {
        return SigninOutcome::Declined(DeclineReason::MissingSessionToken);
    }
    auth.store_cookies(access_token, &user.user.auth, &user.user.id.to_string());
    auth.set_provider(provider);
    log::info!("signed in user {} via {}", user.user.id, provider.cookie_value());
    SigninOutcome::SignedIn(Box::new(user))
}

/// Apply an outcome to the session. Returns the path to navigate to, if any.
pub fn apply_outcome(session: &mut SessionState, outcome: SigninOutcome) -> Option<&'static str> {
    match outcome {
        SigninOutcome::SignedIn(user) => {
            session.sign_in(*user);
            Some(ROOT_PATH)
        }
        SigninOutcome::Declined(reason) => {
            log::debug!("sign-in declined: {reason}");
            None
        }
    }
}

/// Apply the outcome of an OAuth redirect callback. Unlike SDK events, a
/// declined callback still leaves the callback page, towards the welcome page.
pub fn apply_callback_outcome(session: &mut SessionState, outcome: SigninOutcome) -> &'static str {
    apply_outcome(session, outcome).unwrap_or(WELCOME_PATH)
}
