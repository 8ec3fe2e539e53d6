//! Tournament pages: list, create, show and edit.
//!
//! SYSTEM CONTEXT
//! ==============
//! The show route is registered with `reloadOnSearch = false`, so switching
//! tabs (`?tab=`) keeps the view alive. The tournament itself, its candidate
//! teams and its groups load once per `:id` in one sequential task; the
//! calendar and ranking load per tab in a second scope so a tab switch never
//! discards the main load.

#[cfg(test)]
#[path = "tournaments_test.rs"]
mod tournaments_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::{use_deferred_navigate, use_id_param};
use crate::components::messages::{MessageAlerts, Messages};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{
    Calendar, CandidateList, GroupList, Match, Phase, Predict, Ranking, RankEntry, Tournament, TournamentEnvelope,
    TournamentForm,
};
use crate::routes::ROOT_PATH;
use crate::state::page::PageState;
use crate::state::session::SessionState;
use crate::util::membership::{JoinAction, candidate_actions, is_admin};
use crate::util::route_scope::RouteScope;

/// Tabs of the tournament show page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Info,
    Calendar,
    Groups,
    Ranking,
    Admin,
}

impl Tab {
    pub const ALL: [Self; 5] = [Self::Info, Self::Calendar, Self::Groups, Self::Ranking, Self::Admin];

    /// Tab named by the `tab` query parameter; unknown names fall back to info.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.unwrap_or_default() {
            "calendar" => Self::Calendar,
            "groups" => Self::Groups,
            "ranking" => Self::Ranking,
            "admin" => Self::Admin,
            _ => Self::Info,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Calendar => "calendar",
            Self::Groups => "groups",
            Self::Ranking => "ranking",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Calendar => "Calendar",
            Self::Groups => "Groups",
            Self::Ranking => "Ranking",
            Self::Admin => "Admin",
        }
    }

    pub fn href(self, tournament_id: &str) -> String {
        format!("/tournaments/{tournament_id}?tab={}", self.param())
    }
}

/// Calendar grouping requested by `?groupby=`; the admin tab always works by
/// phase.
pub fn calendar_group_by(tab: Tab, value: Option<&str>) -> &'static str {
    match (tab, value) {
        (Tab::Admin, _) | (_, Some("phase")) => "phase",
        _ => "day",
    }
}

/// Ranking subject requested by `?rankby=`.
pub fn rank_by(value: Option<&str>) -> &'static str {
    if value == Some("teams") { "teams" } else { "users" }
}

/// A typed-in score: a non-negative whole number.
pub fn parse_score(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|score| *score >= 0)
}

/// Why a tournament form cannot be submitted, if it cannot.
pub fn tournament_form_error(form: &TournamentForm) -> Option<&'static str> {
    form.name.trim().is_empty().then_some("Tournament name is required.")
}

fn matches_mut(calendar: &mut Calendar) -> impl Iterator<Item = &mut Match> {
    calendar
        .days
        .iter_mut()
        .chain(calendar.phases.iter_mut().flat_map(|phase| phase.days.iter_mut()))
        .flat_map(|day| day.matches.iter_mut())
}

/// Record a stored prediction on its match.
pub fn apply_predict(calendar: &mut Calendar, match_id: i64, predict: &Predict) {
    for m in matches_mut(calendar).filter(|m| m.id_number == match_id) {
        m.has_predict = true;
        m.predict = predict.score_line();
    }
}

/// Replace a match with the version returned by the backend.
pub fn replace_match(calendar: &mut Calendar, updated: &Match) {
    for m in matches_mut(calendar).filter(|m| m.id_number == updated.id_number) {
        *m = updated.clone();
    }
}

/// Replace a phase by name with the result of a simulation.
pub fn replace_phase(calendar: &mut Calendar, updated: Phase) {
    if let Some(phase) = calendar.phases.iter_mut().find(|p| p.name == updated.name) {
        *phase = updated;
    }
}

fn tournament_href(id: impl std::fmt::Display) -> String {
    format!("/tournaments/{id}")
}

#[component]
pub fn TournamentsPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let tournaments = RwSignal::new(Vec::<Tournament>::new());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    if let Some(flash) = page.try_update(PageState::take_flash).flatten() {
        messages.info(Some(&flash));
    }

    scope.load(api::tournaments::query(), move |result| match result {
        Ok(list) => {
            if list.is_empty() {
                messages.info(Some("You have no tournaments."));
            }
            tournaments.set(list);
        }
        Err(err) => messages.fail(&err),
    });

    view! {
        <div class="container">
            <h2>"Tournaments"</h2>
            <MessageAlerts messages=messages/>
            <a class="btn btn-primary" href="/tournaments/new">"New tournament"</a>
            <ul class="list-group">
                {move || {
                    tournaments
                        .get()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <li class="list-group-item">
                                    <a href=tournament_href(t.id)>{t.name}</a>
                                    " "
                                    <small>{t.description}</small>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn TournamentNewPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(TournamentForm::default());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    let on_submit = move || {
        let submitted = form.get_untracked();
        if let Some(error) = tournament_form_error(&submitted) {
            messages.danger.set(Some(error.to_owned()));
            return;
        }
        let navigate = navigate.clone();
        scope.run(
            async move { api::tournaments::save(&submitted).await },
            move |result| match result {
                Ok(tournament) => {
                    page.update(|p| p.set_flash(format!("Tournament {} created.", tournament.name)));
                    navigate(&tournament_href(tournament.id), NavigateOptions::default());
                }
                Err(err) => messages.fail(&err),
            },
        );
    };

    view! {
        <div class="container">
            <h2>"New tournament"</h2>
            <MessageAlerts messages=messages/>
            <TournamentFormView form=form on_submit=on_submit submit_label="Create"/>
        </div>
    }
}

#[component]
pub fn TournamentEditPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let navigate = use_navigate();
    let id = use_id_param();
    let form = RwSignal::new(TournamentForm::default());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    let load_scope = scope.clone();
    Effect::new(move || {
        let id = id.get();
        load_scope.load(
            async move { api::tournaments::get_one(&id).await },
            move |result| match result {
                Ok(envelope) => form.set(TournamentForm {
                    name: envelope.tournament.name,
                    description: envelope.tournament.description,
                }),
                Err(err) => messages.fail(&err),
            },
        );
    });

    let on_submit = move || {
        let submitted = form.get_untracked();
        if let Some(error) = tournament_form_error(&submitted) {
            messages.danger.set(Some(error.to_owned()));
            return;
        }
        let id = id.get_untracked();
        let navigate = navigate.clone();
        scope.run(
            async move { api::tournaments::update(&id, &submitted).await.map(|envelope| (id, envelope)) },
            move |result| match result {
                Ok((id, envelope)) => {
                    let message = envelope.message_info.unwrap_or_else(|| "Tournament updated.".to_owned());
                    page.update(|p| p.set_flash(message));
                    navigate(&tournament_href(id), NavigateOptions::default());
                }
                Err(err) => messages.fail(&err),
            },
        );
    };

    view! {
        <div class="container">
            <h2>"Edit tournament"</h2>
            <MessageAlerts messages=messages/>
            <TournamentFormView form=form on_submit=on_submit submit_label="Update"/>
        </div>
    }
}

#[component]
fn TournamentFormView(
    form: RwSignal<TournamentForm>,
    on_submit: impl Fn() + 'static,
    submit_label: &'static str,
) -> impl IntoView {
    view! {
        <form
            class="form-horizontal"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit();
            }
        >
            <div class="form-group">
                <label class="control-label">"Name"</label>
                <input
                    class="form-control"
                    type="text"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.name = value);
                    }
                />
            </div>
            <div class="form-group">
                <label class="control-label">"Description"</label>
                <textarea
                    class="form-control"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                ></textarea>
            </div>
            <button class="btn btn-primary" type="submit">{submit_label}</button>
        </form>
    }
}

/// Everything the show page loads once per tournament id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ShowData {
    envelope: TournamentEnvelope,
    candidates: CandidateList,
    groups: GroupList,
}

async fn load_show_data(id: String) -> Result<ShowData, ApiError> {
    let envelope = api::tournaments::get_one(&id).await?;
    let candidates = api::tournaments::candidates(&id).await?;
    let groups = api::tournaments::groups(&id).await?;
    Ok(ShowData {
        envelope,
        candidates,
        groups,
    })
}

/// Data loaded for the selected tab.
#[derive(Clone, Debug, PartialEq, Eq)]
enum TabData {
    Calendar(Calendar),
    Ranking(Ranking),
}

async fn load_tab_data(id: String, tab: Tab, group_by: &'static str, rank_by: &'static str) -> Result<Option<TabData>, ApiError> {
    Ok(match tab {
        Tab::Calendar | Tab::Admin => Some(TabData::Calendar(api::tournaments::calendar(&id, group_by).await?)),
        Tab::Ranking => Some(TabData::Ranking(api::tournaments::ranking(&id, rank_by).await?)),
        Tab::Info | Tab::Groups => None,
    })
}

#[component]
pub fn TournamentShowPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let page = expect_context::<RwSignal<PageState>>();
    let redirect = use_deferred_navigate();
    let id = use_id_param();
    let query = use_query_map();
    let tab = Memo::new(move |_| query.with(|q| Tab::from_query(q.get("tab").as_deref())));
    let group_by = Memo::new(move |_| query.with(|q| calendar_group_by(tab.get(), q.get("groupby").as_deref())));
    let rank = Memo::new(move |_| query.with(|q| rank_by(q.get("rankby").as_deref())));

    let data = RwSignal::new(None::<ShowData>);
    let calendar = RwSignal::new(None::<Calendar>);
    let ranking = RwSignal::new(None::<Ranking>);
    let messages = Messages::default();
    let scope = RouteScope::attach();
    let tab_scope = RouteScope::attach();

    if let Some(flash) = page.try_update(PageState::take_flash).flatten() {
        messages.info(Some(&flash));
    }

    let load_scope = scope.clone();
    Effect::new(move || {
        let id = id.get();
        data.set(None);
        load_scope.load(load_show_data(id), move |result| match result {
            Ok(loaded) => data.set(Some(loaded)),
            Err(err) => messages.fail(&err),
        });
    });

    Effect::new(move || {
        let (id, tab, group_by, rank) = (id.get(), tab.get(), group_by.get(), rank.get());
        tab_scope.load(load_tab_data(id, tab, group_by, rank), move |result| match result {
            Ok(Some(TabData::Calendar(loaded))) => calendar.set(Some(loaded)),
            Ok(Some(TabData::Ranking(loaded))) => ranking.set(Some(loaded)),
            Ok(None) => {}
            Err(err) => messages.fail(&err),
        });
    });

    let admin = Memo::new(move |_| {
        let admin_id = data.with(|d| d.as_ref().map_or(0, |d| d.envelope.tournament.admin_id));
        session.with(|s| is_admin(s.user(), admin_id))
    });

    let actions = TournamentActions {
        id,
        data,
        calendar,
        messages,
        scope: StoredValue::new(scope),
    };

    let on_delete = move || {
        let id = id.get_untracked();
        actions.run(
            async move { api::tournaments::remove(&id).await },
            move |envelope| {
                let message = envelope.message_info.unwrap_or_else(|| "Tournament deleted.".to_owned());
                page.update(|p| p.set_flash(message));
                redirect.set(Some(ROOT_PATH.to_owned()));
            },
        );
    };

    view! {
        <div class="container">
            <MessageAlerts messages=messages/>
            <h2>{move || data.with(|d| d.as_ref().map(|d| d.envelope.tournament.name.clone()).unwrap_or_default())}</h2>
            <ul class="nav nav-tabs">
                {Tab::ALL
                    .into_iter()
                    .filter(|t| *t != Tab::Admin)
                    .map(|t| view! { <TabLink tab=t current=tab id=id/> })
                    .collect::<Vec<_>>()}
                <Show when=move || admin.get()>
                    <TabLink tab=Tab::Admin current=tab id=id/>
                </Show>
            </ul>
            <Show when=move || data.with(Option::is_some) fallback=|| view! { <p>"Loading..."</p> }>
                {move || match tab.get() {
                    Tab::Info => view! { <InfoTab actions=actions/> }.into_any(),
                    Tab::Calendar => view! { <CalendarTab actions=actions editable=false/> }.into_any(),
                    Tab::Groups => view! { <GroupsTab groups=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.groups.clone()).unwrap_or_default()))/> }.into_any(),
                    Tab::Ranking => view! { <RankingTab ranking=ranking/> }.into_any(),
                    Tab::Admin if admin.get() => {
                        view! {
                            <AdminTab actions=actions/>
                            <CalendarTab actions=actions editable=true/>
                            <button class="btn btn-danger" on:click=move |_| on_delete()>"Delete tournament"</button>
                        }
                        .into_any()
                    }
                    Tab::Admin => view! { <p>"Only the tournament administrator can see this tab."</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn TabLink(tab: Tab, current: Memo<Tab>, id: Memo<String>) -> impl IntoView {
    view! {
        <li class:active=move || current.get() == tab>
            <a href=move || tab.href(&id.get())>{tab.label()}</a>
        </li>
    }
}

/// Handles shared by the show page tabs.
#[derive(Clone, Copy)]
struct TournamentActions {
    id: Memo<String>,
    data: RwSignal<Option<ShowData>>,
    calendar: RwSignal<Option<Calendar>>,
    messages: Messages,
    scope: StoredValue<RouteScope>,
}

impl TournamentActions {
    fn run<T: 'static>(
        &self,
        action: impl std::future::Future<Output = Result<T, ApiError>> + 'static,
        apply: impl FnOnce(T) + 'static,
    ) {
        let messages = self.messages;
        self.scope.with_value(|scope| {
            scope.run(action, move |result| match result {
                Ok(value) => apply(value),
                Err(err) => messages.fail(&err),
            });
        });
    }

    /// Join or leave as the current user, then refresh participants.
    fn toggle_user(&self, action: JoinAction) {
        let id = self.id.get_untracked();
        let data = self.data;
        self.run(
            async move {
                match action {
                    JoinAction::Join => api::tournaments::join(&id).await?,
                    JoinAction::Leave => api::tournaments::leave(&id).await?,
                };
                api::tournaments::participants(&id).await
            },
            move |participants| {
                data.update(|d| {
                    if let Some(d) = d {
                        d.envelope.participants = participants.participants;
                        d.envelope.joined = action.joined_after();
                    }
                });
            },
        );
    }

    /// Join or leave with a team, then refresh the tournament's teams.
    fn toggle_team(&self, team_id: i64, action: JoinAction) {
        let id = self.id.get_untracked();
        let data = self.data;
        self.run(
            async move {
                let team_id = team_id.to_string();
                match action {
                    JoinAction::Join => api::tournaments::join_as_team(&id, &team_id).await?,
                    JoinAction::Leave => api::tournaments::leave_as_team(&id, &team_id).await?,
                };
                api::tournaments::get_one(&id).await
            },
            move |envelope| {
                data.update(|d| {
                    if let Some(d) = d {
                        d.envelope.teams = envelope.teams;
                    }
                });
            },
        );
    }

    fn predict(&self, match_id: i64, result1: i64, result2: i64) {
        let id = self.id.get_untracked();
        let (calendar, messages) = (self.calendar, self.messages);
        self.run(
            async move { api::tournaments::predict(&id, match_id, result1, result2).await },
            move |envelope| {
                messages.info(envelope.message_info.as_deref());
                calendar.update(|c| {
                    if let Some(c) = c {
                        apply_predict(c, match_id, &envelope.predict);
                    }
                });
            },
        );
    }

    fn update_result(&self, match_id: i64, result1: i64, result2: i64) {
        let id = self.id.get_untracked();
        let calendar = self.calendar;
        self.run(
            async move { api::tournaments::update_match_result(&id, match_id, result1, result2).await },
            move |updated| {
                calendar.update(|c| {
                    if let Some(c) = c {
                        replace_match(c, &updated);
                    }
                });
            },
        );
    }

    fn simulate_phase(&self, phase_name: String) {
        let id = self.id.get_untracked();
        let calendar = self.calendar;
        self.run(
            async move { api::tournaments::simulate_phase(&id, &phase_name).await },
            move |envelope| {
                calendar.update(|c| {
                    if let Some(c) = c {
                        replace_phase(c, envelope.phase);
                    }
                });
            },
        );
    }

    fn reset(&self) {
        let id = self.id.get_untracked();
        let (data, messages) = (self.data, self.messages);
        self.run(
            async move { api::tournaments::reset(&id).await },
            move |groups| {
                messages.info(groups.message_info.as_deref());
                data.update(|d| {
                    if let Some(d) = d {
                        d.groups = groups;
                    }
                });
            },
        );
    }
}

#[component]
fn InfoTab(actions: TournamentActions) -> impl IntoView {
    let data = actions.data;
    let user_action = move || JoinAction::for_joined(data.with(|d| d.as_ref().is_some_and(|d| d.envelope.joined)));
    let team_actions = move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| candidate_actions(&d.candidates, &d.envelope.teams))
                .unwrap_or_default()
        })
    };

    view! {
        <p>{move || data.with(|d| d.as_ref().map(|d| d.envelope.tournament.description.clone()).unwrap_or_default())}</p>
        <button
            class="btn btn-primary"
            on:click=move |_| {
                let joined = data.with_untracked(|d| d.as_ref().is_some_and(|d| d.envelope.joined));
                actions.toggle_user(JoinAction::for_joined(joined));
            }
        >
            {move || user_action().label()}
        </button>
        <h3>"Participants"</h3>
        <ul>
            {move || {
                data.with(|d| d.as_ref().map(|d| d.envelope.participants.clone()).unwrap_or_default())
                    .into_iter()
                    .map(|u| {
                        let name = u.display_name().to_owned();
                        view! { <li><a href=format!("/users/{}", u.id)>{name}</a></li> }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
        <h3>"Your teams"</h3>
        <ul>
            {move || {
                team_actions()
                    .into_iter()
                    .map(|(team, action)| {
                        let team_id = team.id;
                        view! {
                            <li>
                                <a href=format!("/teams/{team_id}")>{team.name}</a>
                                " "
                                <button class="btn btn-xs btn-default" on:click=move |_| actions.toggle_team(team_id, action)>
                                    {action.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

#[component]
fn GroupsTab(#[prop(into)] groups: Signal<GroupList>) -> impl IntoView {
    view! {
        {move || {
            groups
                .get()
                .groups
                .into_iter()
                .map(|group| {
                    view! {
                        <h4>{group.name}</h4>
                        <table class="table table-condensed">
                            <thead>
                                <tr><th>"Team"</th><th>"Pts"</th><th>"GF"</th><th>"GA"</th></tr>
                            </thead>
                            <tbody>
                                {group
                                    .teams
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.name}</td>
                                                <td>{row.points}</td>
                                                <td>{row.goals_f}</td>
                                                <td>{row.goals_a}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                })
                .collect::<Vec<_>>()
        }}
    }
}

#[component]
fn RankingTab(ranking: RwSignal<Option<Ranking>>) -> impl IntoView {
    let rows = move || {
        ranking
            .get()
            .map(|r| if r.users.is_empty() { r.teams } else { r.users })
            .unwrap_or_default()
    };
    view! {
        <table class="table">
            <thead>
                <tr><th>"#"</th><th>"Name"</th><th>"Score"</th></tr>
            </thead>
            <tbody>
                {move || {
                    rows()
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry): (usize, RankEntry)| {
                            let name = if entry.username.is_empty() { entry.name } else { entry.username };
                            view! {
                                <tr><td>{i + 1}</td><td>{name}</td><td>{entry.score}</td></tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

/// Match calendar. Players predict scores; the administrator (`editable`)
/// enters final results and simulates phases.
#[component]
fn CalendarTab(actions: TournamentActions, editable: bool) -> impl IntoView {
    let calendar = actions.calendar;
    view! {
        {move || {
            let Some(loaded) = calendar.get() else {
                return view! { <p>"Loading calendar..."</p> }.into_any();
            };
            let days = loaded
                .days
                .into_iter()
                .map(|day| {
                    view! {
                        <h4>{day.date}</h4>
                        {day
                            .matches
                            .into_iter()
                            .map(|m| view! { <MatchRow actions=actions game=m editable=editable/> })
                            .collect::<Vec<_>>()}
                    }
                })
                .collect::<Vec<_>>();
            let phases = loaded
                .phases
                .into_iter()
                .map(|phase| {
                    let phase_name = phase.name.clone();
                    view! {
                        <h3>
                            {phase.name}
                            {editable
                                .then(|| {
                                    view! {
                                        <button
                                            class="btn btn-xs btn-warning"
                                            on:click=move |_| actions.simulate_phase(phase_name.clone())
                                        >
                                            "Simulate"
                                        </button>
                                    }
                                })}
                        </h3>
                        {phase
                            .days
                            .into_iter()
                            .flat_map(|day| day.matches)
                            .map(|m| view! { <MatchRow actions=actions game=m editable=editable/> })
                            .collect::<Vec<_>>()}
                    }
                })
                .collect::<Vec<_>>();
            view! { {days} {phases} }.into_any()
        }}
    }
}

#[component]
fn MatchRow(actions: TournamentActions, game: Match, editable: bool) -> impl IntoView {
    let score1 = RwSignal::new(String::new());
    let score2 = RwSignal::new(String::new());
    let match_id = game.id_number;
    let messages = actions.messages;

    let submit = move |_| {
        let (Some(result1), Some(result2)) = (parse_score(&score1.get()), parse_score(&score2.get())) else {
            messages.danger.set(Some("Scores must be whole numbers.".to_owned()));
            return;
        };
        if editable {
            actions.update_result(match_id, result1, result2);
        } else {
            actions.predict(match_id, result1, result2);
        }
    };

    let status = if game.finished {
        format!("{} - {}", game.result1, game.result2)
    } else if game.has_predict {
        format!("your prediction: {}", game.predict)
    } else {
        String::new()
    };
    let open = editable || !game.finished;

    view! {
        <div class="row match-row">
            <span class="col-xs-4">{game.team1}</span>
            {open
                .then(|| {
                    view! {
                        <input
                            class="score"
                            type="text"
                            prop:value=move || score1.get()
                            on:input=move |ev| score1.set(event_target_value(&ev))
                        />
                        <input
                            class="score"
                            type="text"
                            prop:value=move || score2.get()
                            on:input=move |ev| score2.set(event_target_value(&ev))
                        />
                    }
                })}
            <span class="col-xs-4">{game.team2}</span>
            <small>{status}</small>
            {open
                .then(|| {
                    view! {
                        <button class="btn btn-xs btn-primary" on:click=submit>
                            {if editable { "Update" } else { "Predict" }}
                        </button>
                    }
                })}
        </div>
    }
}

#[component]
fn AdminTab(actions: TournamentActions) -> impl IntoView {
    view! {
        <div class="well">
            <button class="btn btn-warning" on:click=move |_| actions.reset()>"Reset tournament"</button>
        </div>
    }
}
