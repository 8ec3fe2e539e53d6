use super::*;

#[test]
fn addresses_split_on_common_separators() {
    assert_eq!(
        parse_emails("a@x.com, b@y.org;c@z.net\nd@w.io"),
        Ok(vec![
            "a@x.com".to_owned(),
            "b@y.org".to_owned(),
            "c@z.net".to_owned(),
            "d@w.io".to_owned(),
        ])
    );
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(parse_emails(" , "), Err("Enter at least one email address.".to_owned()));
}

#[test]
fn first_bad_entry_is_reported() {
    assert_eq!(
        parse_emails("a@x.com, nope, @y.com"),
        Err("nope is not a valid email address.".to_owned())
    );
    assert!(parse_emails("a@localhost").is_err());
}
