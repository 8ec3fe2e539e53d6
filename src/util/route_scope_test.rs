use super::*;

#[test]
fn newest_ticket_is_current() {
    let scope = RouteScope::default();
    let ticket = scope.begin();
    assert!(scope.is_current(ticket));
}

#[test]
fn newer_load_supersedes_older_ticket() {
    let scope = RouteScope::default();
    let first = scope.begin();
    let second = scope.begin();
    assert!(!scope.is_current(first));
    assert!(scope.is_current(second));
}

#[test]
fn closing_invalidates_outstanding_tickets() {
    let scope = RouteScope::default();
    let ticket = scope.begin();
    scope.clone().close();
    assert!(!scope.is_alive());
    assert!(!scope.is_current(ticket));
    assert!(!scope.is_current(scope.begin()));
}

#[test]
fn clones_share_state() {
    let scope = RouteScope::default();
    let task_view = scope.clone();
    let ticket = task_view.begin();
    assert!(scope.is_current(ticket));
    scope.begin();
    assert!(!task_view.is_current(ticket));
}
