//! Sign-in page.

use leptos::prelude::*;

use crate::components::signin_buttons::SigninButtons;

#[component]
pub fn SigninPage() -> impl IntoView {
    view! {
        <div class="container signin-page">
            <h2>"Sign in to gonawin"</h2>
            <SigninButtons/>
        </div>
    }
}
