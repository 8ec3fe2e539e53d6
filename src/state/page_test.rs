use super::*;

#[test]
fn default_title_is_app_name() {
    assert_eq!(PageState::default().title, "gonawin");
}

#[test]
fn flash_is_read_once() {
    let mut page = PageState::default();
    page.set_flash("Team has been deleted");
    assert_eq!(page.take_flash(), Some("Team has been deleted".to_owned()));
    assert_eq!(page.take_flash(), None);
}
