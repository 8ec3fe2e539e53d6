use super::*;
use crate::net::types::MatchDay;

fn game(id_number: i64) -> Match {
    Match {
        id_number,
        team1: "Brazil".to_owned(),
        team2: "Chile".to_owned(),
        ..Match::default()
    }
}

fn calendar_by_phase() -> Calendar {
    Calendar {
        days: Vec::new(),
        phases: vec![Phase {
            name: "Quarter-finals".to_owned(),
            days: vec![MatchDay {
                date: "2015-06-27".to_owned(),
                matches: vec![game(1), game(2)],
            }],
        }],
    }
}

#[test]
fn tab_query_parsing_falls_back_to_info() {
    assert_eq!(Tab::from_query(Some("calendar")), Tab::Calendar);
    assert_eq!(Tab::from_query(Some("admin")), Tab::Admin);
    assert_eq!(Tab::from_query(Some("bogus")), Tab::Info);
    assert_eq!(Tab::from_query(None), Tab::Info);
}

#[test]
fn tab_links_stay_on_the_show_route() {
    for tab in Tab::ALL {
        assert_eq!(Tab::from_query(Some(tab.param())), tab);
    }
    assert_eq!(Tab::Ranking.href("9"), "/tournaments/9?tab=ranking");
}

#[test]
fn admin_calendar_is_always_by_phase() {
    assert_eq!(calendar_group_by(Tab::Calendar, None), "day");
    assert_eq!(calendar_group_by(Tab::Calendar, Some("phase")), "phase");
    assert_eq!(calendar_group_by(Tab::Admin, Some("day")), "phase");
}

#[test]
fn ranking_defaults_to_users() {
    assert_eq!(rank_by(None), "users");
    assert_eq!(rank_by(Some("teams")), "teams");
    assert_eq!(rank_by(Some("other")), "users");
}

#[test]
fn scores_are_non_negative_integers() {
    assert_eq!(parse_score(" 3 "), Some(3));
    assert_eq!(parse_score("0"), Some(0));
    assert_eq!(parse_score("-1"), None);
    assert_eq!(parse_score("2.5"), None);
    assert_eq!(parse_score(""), None);
}

#[test]
fn tournament_form_needs_a_name() {
    assert!(tournament_form_error(&TournamentForm::default()).is_some());
    let form = TournamentForm {
        name: "Copa America".to_owned(),
        description: String::new(),
    };
    assert_eq!(tournament_form_error(&form), None);
}

#[test]
fn prediction_is_recorded_on_the_matching_game() {
    let mut calendar = calendar_by_phase();
    apply_predict(&mut calendar, 2, &Predict { result1: 1, result2: 0 });
    let matches = &calendar.phases[0].days[0].matches;
    assert!(!matches[0].has_predict);
    assert!(matches[1].has_predict);
    assert_eq!(matches[1].predict, "1 - 0");
}

#[test]
fn updated_result_replaces_the_game() {
    let mut calendar = calendar_by_phase();
    let updated = Match {
        result1: 2,
        result2: 2,
        finished: true,
        ..game(1)
    };
    replace_match(&mut calendar, &updated);
    assert_eq!(calendar.phases[0].days[0].matches[0], updated);
}

#[test]
fn simulated_phase_replaces_by_name_only() {
    let mut calendar = calendar_by_phase();
    replace_phase(
        &mut calendar,
        Phase {
            name: "Final".to_owned(),
            days: Vec::new(),
        },
    );
    assert_eq!(calendar, calendar_by_phase());

    replace_phase(
        &mut calendar,
        Phase {
            name: "Quarter-finals".to_owned(),
            days: Vec::new(),
        },
    );
    assert!(calendar.phases[0].days.is_empty());
}
