//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds authentication status and the cached current user;
//! `page` holds document-level chrome (title, flash message carried across a
//! redirect).

pub mod page;
pub mod session;
