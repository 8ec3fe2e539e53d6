//! REST resource client for the `/j` backend API.
//!
//! Resources mirror the backend: `tournaments`, `users`, `teams`, `invite`
//! and `auth`. Every call returns a typed envelope or an [`ApiError`]; the
//! 404 redirect is applied by the transport for all of them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{Method, endpoint, request};
use crate::auth::Provider;
use crate::auth::signin::{AuthBackend, ProviderProfile};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::net::types::{GPlusUserInfo, ServiceIds, UserEnvelope};
use crate::routes::{GoogleCallback, TwitterCallback};

fn url(path: &str, query: &[(&str, &str)]) -> String {
    endpoint(&AppConfig::from_env().api_base, path, query)
}

async fn get<T: DeserializeOwned + Default>(path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
    request(Method::Get, &url(path, query), None).await
}

async fn post<T: DeserializeOwned + Default>(path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
    request(Method::Post, &url(path, query), None).await
}

async fn post_json<B: Serialize, T: DeserializeOwned + Default>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    request(Method::Post, &url(path, &[]), Some(&body)).await
}

async fn delete<T: DeserializeOwned + Default>(path: &str) -> Result<T, ApiError> {
    request(Method::Delete, &url(path, &[]), None).await
}

/// Tournament resource.
pub mod tournaments {
    use super::{delete, get, post, post_json};
    use crate::error::ApiError;
    use crate::net::types::{
        Calendar, CandidateList, GroupList, Match, MessageEnvelope, ParticipantList, PhaseEnvelope, PredictEnvelope,
        Ranking, ResetResult, Tournament, TournamentEnvelope, TournamentForm, TournamentList,
    };

    pub(super) fn path(action: &str, id: &str) -> String {
        format!("tournaments/{action}/{id}")
    }

    /// The index answers with a bare array.
    pub async fn query() -> Result<Vec<Tournament>, ApiError> {
        get("tournaments/", &[]).await
    }

    pub async fn get_one(id: &str) -> Result<TournamentEnvelope, ApiError> {
        get(&path("show", id), &[]).await
    }

    /// Create a tournament; the backend answers with the bare record.
    pub async fn save(form: &TournamentForm) -> Result<Tournament, ApiError> {
        post_json("tournaments/new/", form).await
    }

    pub async fn update(id: &str, form: &TournamentForm) -> Result<TournamentEnvelope, ApiError> {
        post_json(&path("update", id), form).await
    }

    pub async fn remove(id: &str) -> Result<MessageEnvelope, ApiError> {
        delete(&path("destroy", id)).await
    }

    pub async fn join(id: &str) -> Result<TournamentEnvelope, ApiError> {
        post(&path("join", id), &[]).await
    }

    pub async fn leave(id: &str) -> Result<TournamentEnvelope, ApiError> {
        post(&path("leave", id), &[]).await
    }

    pub async fn join_as_team(id: &str, team_id: &str) -> Result<TournamentEnvelope, ApiError> {
        post(&format!("{}/{team_id}", path("joinasteam", id)), &[]).await
    }

    pub async fn leave_as_team(id: &str, team_id: &str) -> Result<TournamentEnvelope, ApiError> {
        post(&format!("{}/{team_id}", path("leaveasteam", id)), &[]).await
    }

    pub async fn participants(id: &str) -> Result<ParticipantList, ApiError> {
        get(&path("participants", id), &[]).await
    }

    pub async fn candidates(id: &str) -> Result<CandidateList, ApiError> {
        get(&path("candidates", id), &[]).await
    }

    pub async fn groups(id: &str) -> Result<GroupList, ApiError> {
        get(&path("groups", id), &[]).await
    }

    /// Matches grouped by `"day"` or `"phase"`.
    pub async fn calendar(id: &str, group_by: &str) -> Result<Calendar, ApiError> {
        get(&path("calendar", id), &[("groupby", group_by)]).await
    }

    /// Ranking by `"users"` or `"teams"`.
    pub async fn ranking(id: &str, rank_by: &str) -> Result<Ranking, ApiError> {
        get(&path("ranking", id), &[("rankby", rank_by)]).await
    }

    pub async fn predict(id: &str, match_id: i64, result1: i64, result2: i64) -> Result<PredictEnvelope, ApiError> {
        let (result1, result2) = (result1.to_string(), result2.to_string());
        post(
            &format!("{}/matches/{match_id}", path("predict", id)),
            &[("result1", result1.as_str()), ("result2", result2.as_str())],
        )
        .await
    }

    pub async fn simulate_phase(id: &str, phase_name: &str) -> Result<PhaseEnvelope, ApiError> {
        post(&path("simulatephase", id), &[("phase", phase_name)]).await
    }

    pub async fn update_match_result(id: &str, match_id: i64, result1: i64, result2: i64) -> Result<Match, ApiError> {
        let result = format!("{result1} {result2}");
        post(
            &format!("{}/{match_id}", path("updatematchresult", id)),
            &[("result", result.as_str())],
        )
        .await
    }

    pub async fn reset(id: &str) -> Result<ResetResult, ApiError> {
        post(&path("reset", id), &[]).await
    }

    pub async fn search(q: &str) -> Result<TournamentList, ApiError> {
        get("tournaments/search", &[("q", q)]).await
    }
}

/// User resource.
pub mod users {
    use super::{delete, get as get_json, post_json};
    use crate::error::ApiError;
    use crate::net::types::{MessageEnvelope, User, UserEnvelope, UserList};

    /// The index answers with a bare array of users.
    pub async fn query() -> Result<Vec<User>, ApiError> {
        get_json("users/", &[]).await
    }

    /// Fetch a user with the related collections named in `including`.
    pub async fn get(id: &str, including: &str) -> Result<UserEnvelope, ApiError> {
        get_json(&format!("users/show/{id}"), &[("including", including)]).await
    }

    pub async fn update(id: &str, user: &User) -> Result<UserEnvelope, ApiError> {
        post_json(&format!("users/update/{id}"), user).await
    }

    pub async fn remove(id: &str) -> Result<MessageEnvelope, ApiError> {
        delete(&format!("users/destroy/{id}")).await
    }

    pub async fn search(q: &str) -> Result<UserList, ApiError> {
        get_json("users/search", &[("q", q)]).await
    }
}

/// Team resource.
pub mod teams {
    use super::{delete, get, post, post_json};
    use crate::error::ApiError;
    use crate::net::types::{MessageEnvelope, Team, TeamEnvelope, TeamForm, TeamList};

    pub(super) fn path(action: &str, id: &str) -> String {
        format!("teams/{action}/{id}")
    }

    /// The index answers with a bare array.
    pub async fn query() -> Result<Vec<Team>, ApiError> {
        get("teams/", &[]).await
    }

    pub async fn get_one(id: &str) -> Result<TeamEnvelope, ApiError> {
        get(&path("show", id), &[]).await
    }

    /// Create a team; the backend answers with the bare record.
    pub async fn save(form: &TeamForm) -> Result<Team, ApiError> {
        post_json("teams/new/", form).await
    }

    pub async fn update(id: &str, form: &TeamForm) -> Result<TeamEnvelope, ApiError> {
        post_json(&path("update", id), form).await
    }

    pub async fn remove(id: &str) -> Result<MessageEnvelope, ApiError> {
        delete(&path("destroy", id)).await
    }

    pub async fn join(id: &str) -> Result<TeamEnvelope, ApiError> {
        post(&path("join", id), &[]).await
    }

    pub async fn leave(id: &str) -> Result<TeamEnvelope, ApiError> {
        post(&path("leave", id), &[]).await
    }

    /// Invite a user into a team.
    pub async fn invite(id: &str, user_id: &str) -> Result<MessageEnvelope, ApiError> {
        post(&path("invite", id), &[("userId", user_id)]).await
    }

    pub async fn search(q: &str) -> Result<TeamList, ApiError> {
        get("teams/search", &[("q", q)]).await
    }
}

/// Invite friends to gonawin by email.
pub mod invite {
    use super::post;
    use crate::error::ApiError;
    use crate::net::types::MessageEnvelope;

    /// `emails` is a comma-separated address list.
    pub async fn send(emails: &str, name: &str) -> Result<MessageEnvelope, ApiError> {
        post("invite", &[("emails", emails), ("name", name)]).await
    }
}

/// Public provider ids used to initialise the OAuth SDKs.
pub async fn service_ids() -> Result<ServiceIds, ApiError> {
    get("auth/serviceids", &[]).await
}

/// [`AuthBackend`] over the `/j/auth` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

impl AuthBackend for HttpBackend {
    async fn twitter_user(&self, callback: &TwitterCallback) -> Result<UserEnvelope, ApiError> {
        get(
            "auth/twitter/user",
            &[
                ("oauth_token", callback.oauth_token.as_str()),
                ("oauth_verifier", callback.oauth_verifier.as_str()),
            ],
        )
        .await
    }

    async fn google_user(&self, callback: &GoogleCallback) -> Result<UserEnvelope, ApiError> {
        get("auth/google/user", &[("auth_token", callback.auth_token.as_str())]).await
    }

    async fn provider_profile(&self, provider: Provider, access_token: &str) -> Result<ProviderProfile, ApiError> {
        match provider {
            Provider::GooglePlus | Provider::Google => {
                let info: GPlusUserInfo = get("auth/googleplus/userinfo", &[("access_token", access_token)]).await?;
                Ok(info.into())
            }
            Provider::Facebook | Provider::Twitter => {
                get(
                    &format!("auth/{}/userinfo", provider.backend_name()),
                    &[("access_token", access_token)],
                )
                .await
            }
        }
    }

    async fn provider_user(
        &self,
        provider: Provider,
        access_token: &str,
        profile: &ProviderProfile,
    ) -> Result<UserEnvelope, ApiError> {
        get(
            &format!("auth/{}", provider.backend_name()),
            &provider_user_query(provider, access_token, profile),
        )
        .await
    }
}

fn provider_user_query<'a>(
    provider: Provider,
    access_token: &'a str,
    profile: &'a ProviderProfile,
) -> [(&'static str, &'a str); 5] {
    [
        ("access_token", access_token),
        ("provider", provider.backend_name()),
        ("id", profile.id.as_str()),
        ("name", profile.name.as_str()),
        ("email", profile.email.as_str()),
    ]
}
