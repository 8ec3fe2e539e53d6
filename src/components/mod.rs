//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome and the pieces shared by several
//! pages, reading session state from Leptos context.

pub mod messages;
pub mod nav_bar;
pub mod signin_buttons;
