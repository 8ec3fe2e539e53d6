//! Wire DTOs for the `/j` backend API.
//!
//! DESIGN
//! ======
//! The backend speaks PascalCase JSON and wraps payloads in envelopes of the
//! form `{ <Entity>, MessageInfo }` or `{ <Entities>: [...] }`. Optional
//! collections default to empty so partially populated responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Related collections requested with the current user.
pub const CURRENT_USER_INCLUDES: &str = "Teams TeamRequests Invitations";

/// A gonawin account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub alias: String,
    pub email: String,
    /// Session token issued by the backend at sign-in.
    pub auth: String,
    pub score: i64,
}

impl User {
    /// Name shown in navigation and lists.
    pub fn display_name(&self) -> &str {
        [&self.alias, &self.username, &self.name]
            .into_iter()
            .find(|value| !value.is_empty())
            .map_or("", String::as_str)
    }
}

/// A user with the related collections fetched alongside it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserEnvelope {
    pub user: User,
    pub teams: Vec<Team>,
    pub team_requests: Vec<TeamRequest>,
    pub invitations: Vec<Team>,
    pub tournaments: Vec<Tournament>,
    pub message_info: Option<String>,
}

/// `{ Users: [...] }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserList {
    pub users: Vec<User>,
}

/// A team of players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub admin_id: i64,
    pub private: bool,
}

/// Pending request from a user to join a private team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamRequest {
    pub id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub user_id: i64,
    pub user_name: String,
}

/// `{ Team, Joined, Players, MessageInfo }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamEnvelope {
    pub team: Team,
    pub joined: bool,
    pub players: Vec<User>,
    pub tournaments: Vec<Tournament>,
    pub message_info: Option<String>,
}

/// `{ Teams: [...] }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamList {
    pub teams: Vec<Team>,
    pub message_info: Option<String>,
}

/// Fields submitted when creating or editing a team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamForm {
    pub name: String,
    pub visibility: String,
}

/// A prediction tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub admin_id: i64,
    pub start: String,
    pub end: String,
}

/// `{ Tournament, Joined, Participants, Teams, MessageInfo }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TournamentEnvelope {
    pub tournament: Tournament,
    pub joined: bool,
    pub participants: Vec<User>,
    pub teams: Vec<Team>,
    pub message_info: Option<String>,
}

/// `{ Tournaments: [...] }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TournamentList {
    pub tournaments: Vec<Tournament>,
    pub message_info: Option<String>,
}

/// Fields submitted when creating or editing a tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentForm {
    pub name: String,
    pub description: String,
}

/// `{ Participants: [...] }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParticipantList {
    pub participants: Vec<User>,
}

/// A team eligible to join a tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Candidate {
    pub team: Team,
}

/// `{ Candidates: [...] }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CandidateList {
    pub candidates: Vec<Candidate>,
}

/// One row of a group standings table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupStanding {
    pub name: String,
    pub points: i64,
    pub goals_f: i64,
    pub goals_a: i64,
}

/// A first-stage group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Group {
    pub name: String,
    pub teams: Vec<GroupStanding>,
}

/// `{ Groups: [...], MessageInfo }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupList {
    pub groups: Vec<Group>,
    pub message_info: Option<String>,
}

/// A scheduled match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Match {
    pub id: i64,
    pub id_number: i64,
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub location: String,
    pub result1: i64,
    pub result2: i64,
    pub finished: bool,
    pub has_predict: bool,
    pub predict: String,
}

/// Matches played on one day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MatchDay {
    pub date: String,
    pub matches: Vec<Match>,
}

/// A tournament phase with its match days.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Phase {
    pub name: String,
    pub days: Vec<MatchDay>,
}

/// `{ Days: [...] }` or `{ Phases: [...] }` depending on `groupby`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Calendar {
    pub days: Vec<MatchDay>,
    pub phases: Vec<Phase>,
}

/// `{ Phase }` returned by a phase simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhaseEnvelope {
    pub phase: Phase,
}

/// A stored prediction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Predict {
    pub result1: i64,
    pub result2: i64,
}

impl Predict {
    /// Score line as shown next to a match.
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.result1, self.result2)
    }
}

/// `{ Predict, MessageInfo }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PredictEnvelope {
    pub predict: Predict,
    pub message_info: Option<String>,
}

/// A ranked user or team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RankEntry {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub score: i64,
}

/// `{ Users: [...], Teams: [...] }` depending on `rankby`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ranking {
    pub users: Vec<RankEntry>,
    pub teams: Vec<RankEntry>,
}

/// Reset result `{ Groups, MessageInfo }`.
pub type ResetResult = GroupList;

/// Envelope carrying only `MessageInfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageEnvelope {
    pub message_info: Option<String>,
}

/// Combined search results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchResults {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub tournaments: Vec<Tournament>,
    pub message_info: Option<String>,
}

/// Public provider identifiers used to initialise the OAuth SDKs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceIds {
    pub facebook_app_id: String,
    pub google_plus_client_id: String,
    pub twitter_consumer_key: String,
}

/// Google+ profile returned for an access token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GPlusUserInfo {
    pub id: String,
    pub display_name: String,
    pub emails: Vec<GPlusEmail>,
}

impl GPlusUserInfo {
    /// Primary (first listed) email address.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(|email| email.value.as_str())
    }
}

/// One email entry of a Google+ profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GPlusEmail {
    pub value: String,
}
