//! Team pages: list, create, show, edit and invite.

#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{use_deferred_navigate, use_id_param};
use crate::components::messages::{MessageAlerts, Messages};
use crate::net::api;
use crate::net::types::{Team, TeamEnvelope, TeamForm, User};
use crate::state::page::PageState;
use crate::state::session::SessionState;
use crate::util::membership::{JoinAction, is_admin};
use crate::util::route_scope::RouteScope;

pub const PUBLIC: &str = "Public";
pub const PRIVATE: &str = "Private";

/// Form prefilled from an existing team.
pub fn edit_form(team: &Team) -> TeamForm {
    TeamForm {
        name: team.name.clone(),
        visibility: if team.private { PRIVATE } else { PUBLIC }.to_owned(),
    }
}

/// Why a team form cannot be submitted, if it cannot.
pub fn team_form_error(form: &TeamForm) -> Option<&'static str> {
    if form.name.trim().is_empty() {
        return Some("Team name is required.");
    }
    if form.visibility != PUBLIC && form.visibility != PRIVATE {
        return Some("Choose whether the team is public or private.");
    }
    None
}

fn team_href(id: impl std::fmt::Display) -> String {
    format!("/teams/{id}")
}

#[component]
pub fn TeamsPage() -> impl IntoView {
    let teams = RwSignal::new(Vec::<Team>::new());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    scope.load(api::teams::query(), move |result| match result {
        Ok(list) => {
            if list.is_empty() {
                messages.info(Some("You have no teams."));
            }
            teams.set(list);
        }
        Err(err) => messages.fail(&err),
    });

    view! {
        <div class="container">
            <h2>"Teams"</h2>
            <MessageAlerts messages=messages/>
            <a class="btn btn-primary" href="/teams/new">"New team"</a>
            <ul class="list-group">
                {move || {
                    teams
                        .get()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <li class="list-group-item"><a href=team_href(t.id)>{t.name}</a></li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn TeamNewPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(TeamForm {
        name: String::new(),
        visibility: PUBLIC.to_owned(),
    });
    let messages = Messages::default();
    let scope = RouteScope::attach();

    let on_submit = move || {
        let submitted = form.get_untracked();
        if let Some(error) = team_form_error(&submitted) {
            messages.danger.set(Some(error.to_owned()));
            return;
        }
        let navigate = navigate.clone();
        scope.run(
            async move { api::teams::save(&submitted).await },
            move |result| match result {
                Ok(team) => {
                    page.update(|p| p.set_flash(format!("Team {} created.", team.name)));
                    navigate(&team_href(team.id), NavigateOptions::default());
                }
                Err(err) => messages.fail(&err),
            },
        );
    };

    view! {
        <div class="container">
            <h2>"New team"</h2>
            <MessageAlerts messages=messages/>
            <TeamFormView form=form on_submit=on_submit submit_label="Create"/>
        </div>
    }
}

#[component]
pub fn TeamShowPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let page = expect_context::<RwSignal<PageState>>();
    let redirect = use_deferred_navigate();
    let id = use_id_param();
    let data = RwSignal::new(None::<TeamEnvelope>);
    let messages = Messages::default();
    let scope = RouteScope::attach();

    if let Some(flash) = page.try_update(PageState::take_flash).flatten() {
        messages.info(Some(&flash));
    }

    let load_scope = scope.clone();
    Effect::new(move || {
        let id = id.get();
        data.set(None);
        load_scope.load(
            async move { api::teams::get_one(&id).await },
            move |result| match result {
                Ok(envelope) => data.set(Some(envelope)),
                Err(err) => messages.fail(&err),
            },
        );
    });

    let action = move || JoinAction::for_joined(data.with(|d| d.as_ref().is_some_and(|d| d.joined)));
    let admin = move || {
        let admin_id = data.with(|d| d.as_ref().map_or(0, |d| d.team.admin_id));
        session.with(|s| is_admin(s.user(), admin_id))
    };

    let join_scope = scope.clone();
    let on_join = move |_| {
        let id = id.get_untracked();
        let chosen = JoinAction::for_joined(data.with_untracked(|d| d.as_ref().is_some_and(|d| d.joined)));
        let request = async move {
            match chosen {
                JoinAction::Join => api::teams::join(&id).await,
                JoinAction::Leave => api::teams::leave(&id).await,
            }
        };
        join_scope.run(request, move |result| match result {
            Ok(envelope) => {
                messages.info(envelope.message_info.as_deref());
                data.set(Some(envelope));
            }
            Err(err) => messages.fail(&err),
        });
    };

    let delete_scope = StoredValue::new(scope);
    let on_delete = move |_| {
        let id = id.get_untracked();
        delete_scope.with_value(|scope| {
            scope.run(
                async move { api::teams::remove(&id).await },
                move |result| match result {
                    Ok(envelope) => {
                        if let Some(message) = envelope.message_info {
                            page.update(|p| p.set_flash(message));
                        }
                        redirect.set(Some("/teams".to_owned()));
                    }
                    Err(err) => messages.fail(&err),
                },
            );
        });
    };

    view! {
        <div class="container">
            <MessageAlerts messages=messages/>
            {move || {
                data.get()
                    .map(|envelope| {
                        let team_id = envelope.team.id;
                        view! {
                            <h2>{envelope.team.name}</h2>
                            <ul>
                                {envelope
                                    .players
                                    .into_iter()
                                    .map(|u| {
                                        let name = u.display_name().to_owned();
                                        view! { <li><a href=format!("/users/{}", u.id)>{name}</a></li> }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <h3>"Tournaments"</h3>
                            <ul>
                                {envelope
                                    .tournaments
                                    .into_iter()
                                    .map(|t| view! { <li><a href=format!("/tournaments/{}", t.id)>{t.name}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <a class="btn btn-default" href=format!("/teams/invite/{team_id}")>"Invite"</a>
                        }
                    })
            }}
            <button class="btn btn-primary" on:click=on_join>{move || action().label()}</button>
            <Show when=admin>
                <a class="btn btn-default" href=move || format!("/teams/edit/{}", id.get())>"Edit"</a>
                <button class="btn btn-danger" on:click=on_delete>"Delete"</button>
            </Show>
        </div>
    }
}

#[component]
pub fn TeamEditPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let navigate = use_navigate();
    let id = use_id_param();
    let form = RwSignal::new(TeamForm::default());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    let load_scope = scope.clone();
    Effect::new(move || {
        let id = id.get();
        load_scope.load(
            async move { api::teams::get_one(&id).await },
            move |result| match result {
                Ok(envelope) => form.set(edit_form(&envelope.team)),
                Err(err) => messages.fail(&err),
            },
        );
    });

    let on_submit = move || {
        let submitted = form.get_untracked();
        if let Some(error) = team_form_error(&submitted) {
            messages.danger.set(Some(error.to_owned()));
            return;
        }
        let id = id.get_untracked();
        let navigate = navigate.clone();
        scope.run(
            async move { api::teams::update(&id, &submitted).await.map(|envelope| (id, envelope)) },
            move |result| match result {
                Ok((id, envelope)) => {
                    page.update(|p| p.set_flash(envelope.message_info.unwrap_or_else(|| "Team updated.".to_owned())));
                    navigate(&team_href(id), NavigateOptions::default());
                }
                Err(err) => messages.fail(&err),
            },
        );
    };

    view! {
        <div class="container">
            <h2>"Edit team"</h2>
            <MessageAlerts messages=messages/>
            <TeamFormView form=form on_submit=on_submit submit_label="Update"/>
        </div>
    }
}

/// Invite other users into a team.
#[component]
pub fn TeamInvitePage() -> impl IntoView {
    let id = use_id_param();
    let users = RwSignal::new(Vec::<User>::new());
    let invited = RwSignal::new(Vec::<i64>::new());
    let messages = Messages::default();
    let scope = RouteScope::attach();

    scope.load(api::users::query(), move |result| match result {
        Ok(list) => users.set(list),
        Err(err) => messages.fail(&err),
    });

    let invite = Callback::new(move |user_id: i64| {
        let team_id = id.get_untracked();
        scope.run(
            async move { api::teams::invite(&team_id, &user_id.to_string()).await },
            move |result| match result {
                Ok(envelope) => {
                    invited.update(|ids| ids.push(user_id));
                    messages.info(envelope.message_info.as_deref().or(Some("Invitation sent.")));
                }
                Err(err) => messages.fail(&err),
            },
        );
    });

    view! {
        <div class="container">
            <h2>"Invite users"</h2>
            <MessageAlerts messages=messages/>
            <ul class="list-group">
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|u| {
                            let user_id = u.id;
                            let name = u.display_name().to_owned();
                            view! {
                                <li class="list-group-item">
                                    {name}
                                    " "
                                    <button
                                        class="btn btn-xs btn-primary"
                                        disabled=move || invited.with(|ids| ids.contains(&user_id))
                                        on:click=move |_| invite.run(user_id)
                                    >
                                        "Invite"
                                    </button>
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
fn TeamFormView(form: RwSignal<TeamForm>, on_submit: impl Fn() + 'static, submit_label: &'static str) -> impl IntoView {
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
                <label class="control-label">"Visibility"</label>
                <select
                    class="form-control"
                    prop:value=move || form.with(|f| f.visibility.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.visibility = value);
                    }
                >
                    <option value=PUBLIC>{PUBLIC}</option>
                    <option value=PRIVATE>{PRIVATE}</option>
                </select>
            </div>
            <button class="btn btn-primary" type="submit">{submit_label}</button>
        </form>
    }
}
