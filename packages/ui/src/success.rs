//! Signed-in view.

use auth::{AuthState, User};
use dioxus::prelude::*;

use crate::session::use_session;

/// Welcome card shown once a sign-in succeeds. Logging out returns the
/// session to idle; the form has already reset itself by this point.
#[component]
pub fn SuccessCard(user: User) -> Element {
    let mut session = use_session();

    rsx! {
        div { class: "success-state",
            h1 { "Welcome back" }
            p { "You are logged in as {user.email}." }
            button {
                r#type: "button",
                onclick: move |_| session.set(AuthState::Idle),
                "Log out"
            }
        }
    }
}
