//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped loading through a
//! [`RouteScope`](crate::util::route_scope::RouteScope) and delegates shared
//! chrome to `components`. Pure view logic lives next to the page and is
//! tested there.

pub mod home;
pub mod invite;
pub mod search;
pub mod settings;
pub mod signin;
pub mod teams;
pub mod tournaments;
pub mod users;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

/// The `:id` segment of the current route, or empty when absent.
pub(crate) fn use_id_param() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()))
}

/// Navigation requested from reactive children, which cannot hold the
/// router's navigate closure. Setting the signal navigates from an effect.
pub(crate) fn use_deferred_navigate() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(to) = target.get() {
            target.set(None);
            navigate(&to, NavigateOptions::default());
        }
    });
    target
}
