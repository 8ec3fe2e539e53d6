//! Join/leave state of the current user and their teams.

#[cfg(test)]
#[path = "membership_test.rs"]
mod membership_test;

use crate::net::types::{CandidateList, Team, UserEnvelope};

/// Next membership action offered to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinAction {
    Join,
    Leave,
}

impl JoinAction {
    /// Action offered given the current membership.
    pub fn for_joined(joined: bool) -> Self {
        if joined { Self::Leave } else { Self::Join }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Join => "Join",
            Self::Leave => "Leave",
        }
    }

    /// Membership after the action succeeds.
    pub fn joined_after(self) -> bool {
        self == Self::Join
    }
}

/// Whether the loaded user administers a record owned by `admin_id`.
pub fn is_admin(user: Option<&UserEnvelope>, admin_id: i64) -> bool {
    user.is_some_and(|u| u.user.id != 0 && u.user.id == admin_id)
}

pub fn team_joined(team_id: i64, teams: &[Team]) -> bool {
    teams.iter().any(|team| team.id == team_id)
}

/// Join/leave action for each candidate team, in candidate order.
pub fn candidate_actions(candidates: &CandidateList, joined_teams: &[Team]) -> Vec<(Team, JoinAction)> {
    candidates
        .candidates
        .iter()
        .map(|candidate| {
            let action = JoinAction::for_joined(team_joined(candidate.team.id, joined_teams));
            (candidate.team.clone(), action)
        })
        .collect()
}
