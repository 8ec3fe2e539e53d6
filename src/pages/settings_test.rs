use super::*;

#[test]
fn only_the_session_provider_is_marked() {
    let statuses = network_statuses(Some(Provider::Facebook));
    assert_eq!(
        statuses,
        vec![("Twitter", false), ("Facebook", true), ("Google", false), ("Google+", false)]
    );
}

#[test]
fn no_provider_marks_nothing() {
    assert!(network_statuses(None).iter().all(|(_, connected)| !connected));
}
