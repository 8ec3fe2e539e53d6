//! Session context shared by the navigation guard and auth-aware views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the application shell and provided as
//! `RwSignal<SessionState>`. Only the navigation guard and sign-in completion
//! write to it; pages read it.
//!
//! INVARIANTS
//! ==========
//! - A user (pending or loaded) is present only while `is_logged_in` is true.
//!   Logging out through [`SessionState::set_logged_in`] drops the user.
//! - At most one current-user fetch is outstanding. A result whose ticket no
//!   longer matches the pending slot is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{ServiceIds, User, UserEnvelope};

/// Identifies one current-user fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Current user of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UserSlot {
    /// Not fetched.
    #[default]
    Absent,
    /// Fetch in flight.
    Pending(FetchTicket),
    Loaded(Box<UserEnvelope>),
}

/// What happened to a completed current-user fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResolution {
    /// The user was stored.
    Applied,
    /// The fetch was superseded (sign-out or sign-in happened meanwhile).
    Stale,
    /// The fetch failed; the session was signed out and auth cookies should
    /// be cleared so the next navigation lands on the welcome page.
    SignedOut,
}

/// Authentication status and cached profile for the page lifetime.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    is_logged_in: bool,
    current_user: UserSlot,
    pub service_ids: Option<ServiceIds>,
    next_ticket: u64,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Record the login status computed by the auth service.
    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.is_logged_in = logged_in;
        if !logged_in {
            self.current_user = UserSlot::Absent;
        }
    }

    pub fn current_user(&self) -> &UserSlot {
        &self.current_user
    }

    /// The loaded user, if the fetch has completed.
    pub fn user(&self) -> Option<&UserEnvelope> {
        match &self.current_user {
            UserSlot::Loaded(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a user is present, loaded or still in flight.
    pub fn has_user(&self) -> bool {
        !matches!(self.current_user, UserSlot::Absent)
    }

    /// Claim the current-user fetch. Returns `None` when signed out or when a
    /// user is already pending or loaded.
    pub fn begin_user_fetch(&mut self) -> Option<FetchTicket> {
        if !self.is_logged_in || self.has_user() {
            return None;
        }
        self.next_ticket += 1;
        let ticket = FetchTicket(self.next_ticket);
        self.current_user = UserSlot::Pending(ticket);
        Some(ticket)
    }

    /// Apply the outcome of the fetch started with `ticket`.
    pub fn finish_user_fetch<E>(&mut self, ticket: FetchTicket, result: Result<UserEnvelope, E>) -> FetchResolution {
        if self.current_user != UserSlot::Pending(ticket) {
            return FetchResolution::Stale;
        }
        match result {
            Ok(user) => {
                self.current_user = UserSlot::Loaded(Box::new(user));
                FetchResolution::Applied
            }
            Err(_) => {
                self.set_logged_in(false);
                FetchResolution::SignedOut
            }
        }
    }

    /// Record a completed sign-in.
    pub fn sign_in(&mut self, user: UserEnvelope) {
        self.is_logged_in = true;
        self.current_user = UserSlot::Loaded(Box::new(user));
    }

    /// Replace the profile of the loaded user after an edit. Related
    /// collections are kept; nothing happens while no user is loaded.
    pub fn update_profile(&mut self, user: User) {
        if let UserSlot::Loaded(current) = &mut self.current_user {
            current.user = user;
        }
    }

    /// Reset to a signed-out session. Provider ids are kept.
    pub fn sign_out(&mut self) {
        self.set_logged_in(false);
    }
}
