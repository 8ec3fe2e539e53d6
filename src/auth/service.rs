//! Cookie-backed authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard asks this service whether a session exists on every
//! route change, and sign-in completion stores the backend-issued token here.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use super::cookies::{CookieJar, DefaultCookies};

/// Cookie holding the provider access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
/// Cookie holding the backend session token.
pub const AUTH_COOKIE: &str = "auth";
/// Cookie holding the signed-in user's id.
pub const USER_ID_COOKIE: &str = "user_id";
/// Cookie holding the provider used to sign in.
pub const PROVIDER_COOKIE: &str = "provider";

/// OAuth providers a user can sign in with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    /// Google+ JS sign-in button.
    GooglePlus,
    /// Google redirect flow (`/auth/google/callback`).
    Google,
    Twitter,
    Facebook,
}

impl Provider {
    /// Value stored in the `provider` cookie.
    pub fn cookie_value(self) -> &'static str {
        match self {
            Self::GooglePlus => "google_plus",
            Self::Google => "google",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }

    /// Provider name understood by the backend sign-in endpoint.
    pub fn backend_name(self) -> &'static str {
        match self {
            Self::GooglePlus | Self::Google => "google",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }

    /// Parse a `provider` cookie value.
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        match value {
            "google_plus" => Some(Self::GooglePlus),
            "google" => Some(Self::Google),
            "twitter" => Some(Self::Twitter),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }
}

/// Authentication facade over a [`CookieJar`].
#[derive(Clone, Debug, Default)]
pub struct AuthService<C = DefaultCookies> {
    cookies: C,
}

impl<C: CookieJar> AuthService<C> {
    pub fn new(cookies: C) -> Self {
        Self { cookies }
    }

    /// True when both a session token and a user id are stored.
    pub fn is_logged_in(&self) -> bool {
        self.non_empty(AUTH_COOKIE).is_some() && self.non_empty(USER_ID_COOKIE).is_some()
    }

    /// Id of the signed-in user, if any.
    pub fn user_id(&self) -> Option<String> {
        self.non_empty(USER_ID_COOKIE)
    }

    /// Backend session token, if any.
    pub fn auth_token(&self) -> Option<String> {
        self.non_empty(AUTH_COOKIE)
    }

    /// Provider used for the current session, if recorded.
    pub fn provider(&self) -> Option<Provider> {
        self.cookies
            .get(PROVIDER_COOKIE)
            .as_deref()
            .and_then(Provider::from_cookie_value)
    }

    /// Persist a completed sign-in.
    pub fn store_cookies(&self, access_token: &str, auth_token: &str, user_id: &str) {
        self.cookies.set(ACCESS_TOKEN_COOKIE, access_token);
        self.cookies.set(AUTH_COOKIE, auth_token);
        self.cookies.set(USER_ID_COOKIE, user_id);
    }

    pub fn set_provider(&self, provider: Provider) {
        self.cookies.set(PROVIDER_COOKIE, provider.cookie_value());
    }

    /// Forget the session (logout or a rejected session token).
    pub fn clear(&self) {
        for name in [ACCESS_TOKEN_COOKIE, AUTH_COOKIE, USER_ID_COOKIE, PROVIDER_COOKIE] {
            self.cookies.remove(name);
        }
    }

    fn non_empty(&self, name: &str) -> Option<String> {
        self.cookies.get(name).filter(|value| !value.is_empty())
    }
}
