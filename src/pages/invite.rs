//! Invite friends to gonawin by email.

#[cfg(test)]
#[path = "invite_test.rs"]
mod invite_test;

use leptos::prelude::*;

use crate::components::messages::{MessageAlerts, Messages};
use crate::net::api;
use crate::state::session::SessionState;
use crate::util::route_scope::RouteScope;

/// Split a free-form address list (commas, semicolons or whitespace) into
/// addresses. Fails with the first entry that is not an address.
pub fn parse_emails(raw: &str) -> Result<Vec<String>, String> {
    let emails: Vec<String> = raw
        .split([',', ';', ' ', '\n', '\t'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect();
    if emails.is_empty() {
        return Err("Enter at least one email address.".to_owned());
    }
    if let Some(bad) = emails.iter().find(|e| !is_address(e)) {
        return Err(format!("{bad} is not a valid email address."));
    }
    Ok(emails)
}

fn is_address(entry: &str) -> bool {
    entry
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
}

#[component]
pub fn InvitePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let emails = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let messages = Messages::default();
    let scope = RouteScope::attach();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let list = match parse_emails(&emails.get_untracked()) {
            Ok(list) => list.join(","),
            Err(error) => {
                messages.danger.set(Some(error));
                return;
            }
        };
        let name = session.with_untracked(|s| s.user().map(|u| u.user.display_name().to_owned()).unwrap_or_default());
        busy.set(true);
        scope.run(
            async move { api::invite::send(&list, &name).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(envelope) => {
                        emails.set(String::new());
                        messages.info(envelope.message_info.as_deref().or(Some("Invitations sent.")));
                    }
                    Err(err) => messages.fail(&err),
                }
            },
        );
    };

    view! {
        <div class="container">
            <h2>"Invite your friends"</h2>
            <MessageAlerts messages=messages/>
            <form on:submit=on_submit>
                <textarea
                    class="form-control"
                    placeholder="friend@example.com, other@example.com"
                    prop:value=move || emails.get()
                    on:input=move |ev| emails.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    "Send invitations"
                </button>
            </form>
        </div>
    }
}
