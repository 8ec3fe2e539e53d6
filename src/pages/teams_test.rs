use super::*;

#[test]
fn edit_form_maps_private_flag_to_visibility() {
    let team = Team {
        id: 4,
        name: "Ninjas".to_owned(),
        private: true,
        ..Team::default()
    };
    assert_eq!(
        edit_form(&team),
        TeamForm {
            name: "Ninjas".to_owned(),
            visibility: PRIVATE.to_owned(),
        }
    );
    assert_eq!(edit_form(&Team::default()).visibility, PUBLIC);
}

#[test]
fn team_form_requires_a_name_and_visibility() {
    let mut form = TeamForm {
        name: " ".to_owned(),
        visibility: PUBLIC.to_owned(),
    };
    assert_eq!(team_form_error(&form), Some("Team name is required."));
    form.name = "Ninjas".to_owned();
    assert_eq!(team_form_error(&form), None);
    form.visibility = String::new();
    assert!(team_form_error(&form).is_some());
}

#[test]
fn team_links_use_the_show_route() {
    assert_eq!(team_href(12), "/teams/12");
}
