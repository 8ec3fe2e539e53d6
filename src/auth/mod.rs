//! Authentication: cookie storage, the auth service, OAuth sign-in
//! completion, and provider SDK glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` answers "is there a session?" for the navigation guard;
//! `signin` turns provider credentials into a session; `sdk` bridges the
//! provider JavaScript widgets into `signin`.

pub mod cookies;
pub mod sdk;
pub mod service;
pub mod signin;

pub use service::{AuthService, Provider};
