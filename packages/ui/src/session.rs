//! Session context and the submit bridge.

use auth::{run_login, AuthState, Credentials, DemoAuthenticator};
use dioxus::prelude::*;

/// Get the shared session state.
/// Returns a signal that updates on every sign-in transition.
pub fn use_session() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session state.
/// Wrap the app shell with this component so every view sees the same state.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(AuthState::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Drive one sign-in attempt, mirroring every transition into the shared
/// signal. The submit control stays disabled for the whole `Submitting`
/// stretch, so two of these can never be in flight at once.
pub async fn submit_credentials(mut session: Signal<AuthState>, credentials: Credentials) {
    run_login(&DemoAuthenticator::default(), credentials, move |state| {
        session.set(state);
    })
    .await;
}
