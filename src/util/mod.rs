//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep lifecycle and membership rules out of the page
//! components so they can be tested without a browser.

pub mod membership;
pub mod route_scope;
