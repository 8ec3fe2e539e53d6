use super::*;

#[test]
fn not_found_is_not_shown_as_danger() {
    assert_eq!(danger_text(&ApiError::NotFound), None);
}

#[test]
fn status_failures_show_backend_text() {
    let err = ApiError::Status {
        status: 400,
        body: "\"Tournament name already taken\"".to_owned(),
    };
    assert_eq!(danger_text(&err).as_deref(), Some("Tournament name already taken"));
    assert_eq!(
        danger_text(&ApiError::Network("offline".to_owned())).as_deref(),
        Some("network error: offline")
    );
}

#[test]
fn blank_info_messages_are_ignored() {
    assert_eq!(info_text(None), None);
    assert_eq!(info_text(Some("  ")), None);
    assert_eq!(info_text(Some(" Team created ")).as_deref(), Some("Team created"));
}
