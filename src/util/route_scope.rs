//! Lifetime of data loads started by a routed view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages load their data with `spawn_local` tasks that may finish after the
//! user has moved on. Each load takes a [`LoadTicket`] from the page's
//! [`RouteScope`] and checks it before writing results. A ticket goes stale
//! when the view is disposed or when the same view starts a newer load (for
//! example a `:id` or tab change on a route that is not re-created on
//! search changes).

#[cfg(test)]
#[path = "route_scope_test.rs"]
mod route_scope_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Generation of one load started in a [`RouteScope`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Alive flag plus load generation for a routed view.
#[derive(Clone, Debug)]
pub struct RouteScope {
    alive: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
}

impl Default for RouteScope {
    fn default() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl RouteScope {
    /// Scope that closes when the current reactive owner is cleaned up.
    /// Call from inside a component body.
    pub fn attach() -> Self {
        let scope = Self::default();
        let closer = scope.clone();
        leptos::prelude::on_cleanup(move || closer.close());
        scope
    }

    /// Start a load, superseding every earlier ticket.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.epoch.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether results of the load holding `ticket` may still be applied.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.alive.load(Ordering::Relaxed) && self.epoch.load(Ordering::Relaxed) == ticket.0
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Invalidate every outstanding ticket.
    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run a data load for this view. `apply` only sees the result when no
    /// newer load was started and the view is still mounted.
    pub fn load<T: 'static>(&self, load: impl Future<Output = T> + 'static, apply: impl FnOnce(T) + 'static) {
        let ticket = self.begin();
        let scope = self.clone();
        spawn(async move {
            let value = load.await;
            if scope.is_current(ticket) {
                apply(value);
            } else {
                log::debug!("discarding superseded route load");
            }
        });
    }

    /// Run a user action. Unlike [`RouteScope::load`] it does not supersede
    /// pending loads; `apply` runs while the view is mounted.
    pub fn run<T: 'static>(&self, action: impl Future<Output = T> + 'static, apply: impl FnOnce(T) + 'static) {
        let scope = self.clone();
        spawn(async move {
            let value = action.await;
            if scope.is_alive() {
                apply(value);
            }
        });
    }
}

#[cfg(feature = "csr")]
fn spawn(task: impl Future<Output = ()> + 'static) {
    leptos::task::spawn_local(task);
}

#[cfg(not(feature = "csr"))]
fn spawn(task: impl Future<Output = ()> + 'static) {
    drop(task);
}
