use dioxus::prelude::*;
use ui::{use_session, LoginForm, Navbar, SessionProvider, SuccessCard, NAV_ITEMS};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionProvider {
            Shell {}
        }
    }
}

/// Page shell: navigation, branding, and the panel that swaps between the
/// login form and the signed-in view.
#[component]
fn Shell() -> Element {
    let session = use_session();
    let active = use_signal(|| 0usize);

    let description = NAV_ITEMS[active()].description;
    let user = session.read().user().cloned();

    rsx! {
        div { class: "app-shell",
            Navbar { active }
            h1 { class: "background-heading", "Welcome to SecurePortal" }
            p { class: "nav-context", role: "status", "{description}" }
            div { class: "panel",
                if let Some(user) = user {
                    SuccessCard { user }
                } else {
                    LoginForm { with_challenge: true }
                }
            }
        }
    }
}
