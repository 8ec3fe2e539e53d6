use super::*;

fn user(username: &str, email: &str) -> User {
    User {
        id: 3,
        username: username.to_owned(),
        email: email.to_owned(),
        ..User::default()
    }
}

#[test]
fn username_is_required() {
    assert_eq!(profile_form_error(&user("  ", "a@b.c")), Some("Username is required."));
}

#[test]
fn email_must_look_like_an_address_when_given() {
    assert_eq!(profile_form_error(&user("ana", "nope")), Some("Email address is not valid."));
    assert_eq!(profile_form_error(&user("ana", "")), None);
    assert_eq!(profile_form_error(&user("ana", "ana@example.com")), None);
}
