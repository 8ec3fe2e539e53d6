use super::*;
use crate::net::types::{Candidate, User};

fn team(id: i64) -> Team {
    Team {
        id,
        name: format!("team {id}"),
        ..Team::default()
    }
}

#[test]
fn action_follows_membership() {
    assert_eq!(JoinAction::for_joined(true), JoinAction::Leave);
    assert_eq!(JoinAction::for_joined(false).label(), "Join");
    assert!(JoinAction::Join.joined_after());
    assert!(!JoinAction::Leave.joined_after());
}

#[test]
fn admin_requires_a_loaded_matching_user() {
    let envelope = UserEnvelope {
        user: User {
            id: 5,
            ..User::default()
        },
        ..UserEnvelope::default()
    };
    assert!(is_admin(Some(&envelope), 5));
    assert!(!is_admin(Some(&envelope), 6));
    assert!(!is_admin(None, 5));
    assert!(!is_admin(Some(&UserEnvelope::default()), 0));
}

#[test]
fn candidates_get_leave_when_already_in_the_tournament() {
    let candidates = CandidateList {
        candidates: vec![Candidate { team: team(1) }, Candidate { team: team(2) }],
    };
    let actions = candidate_actions(&candidates, &[team(2)]);
    assert_eq!(
        actions.iter().map(|(t, a)| (t.id, *a)).collect::<Vec<_>>(),
        vec![(1, JoinAction::Join), (2, JoinAction::Leave)]
    );
}

#[test]
fn no_joined_teams_means_every_candidate_can_join() {
    let candidates = CandidateList {
        candidates: vec![Candidate { team: team(1) }],
    };
    assert_eq!(candidate_actions(&candidates, &[])[0].1, JoinAction::Join);
}
