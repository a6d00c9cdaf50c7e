//! Sign-in session state.
//!
//! [`AuthState`] is the single source of truth for whether the user is signed
//! in, signing in, or failed; the UI keeps one in a signal and replaces it
//! wholesale on every transition. [`run_login`] drives the submit flow:
//! publish `Submitting`, await the authenticator, publish the outcome.

use serde::{Deserialize, Serialize};

use crate::authenticator::{Authenticate, Credentials};

/// Account info returned by a successful sign-in. Never contains the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Where the current sign-in attempt stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Idle,
    Submitting,
    Success {
        user: User,
    },
    Error {
        message: String,
    },
}

impl AuthState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Success { user } => Some(user),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Drive one sign-in attempt through the authenticator.
///
/// Publishes `Submitting` before the call and exactly one of
/// `Success`/`Error` after it. Credentials are normalized here so every
/// authenticator sees the canonical form. The call always runs to completion;
/// there is no cancellation token, so a result is published even if the
/// caller stopped caring in the meantime.
pub async fn run_login<A: Authenticate>(
    authenticator: &A,
    credentials: Credentials,
    mut publish: impl FnMut(AuthState),
) {
    publish(AuthState::Submitting);

    match authenticator.authenticate(credentials.normalized()).await {
        Ok(user) => {
            tracing::debug!(email = %user.email, "sign-in succeeded");
            publish(AuthState::Success { user });
        }
        Err(err) => {
            tracing::warn!("sign-in failed: {err}");
            publish(AuthState::Error {
                message: err.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::authenticator::DemoAuthenticator;
    use crate::error::AuthError;

    /// Records every call so tests can assert the authenticator was (not) hit.
    struct CountingAuthenticator {
        calls: std::cell::Cell<usize>,
        outcome: Result<User, AuthError>,
    }

    impl CountingAuthenticator {
        fn succeeding() -> Self {
            Self {
                calls: std::cell::Cell::new(0),
                outcome: Ok(User {
                    name: "Test".to_string(),
                    email: "test@example.com".to_string(),
                }),
            }
        }
    }

    impl Authenticate for CountingAuthenticator {
        async fn authenticate(&self, _credentials: Credentials) -> Result<User, AuthError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn collect_states<'a>(into: &'a mut Vec<AuthState>) -> impl FnMut(AuthState) + 'a {
        move |state| into.push(state)
    }

    #[tokio::test]
    async fn valid_demo_credentials_go_submitting_then_success() {
        let demo = DemoAuthenticator::with_delay(Duration::ZERO);
        let mut states = Vec::new();

        run_login(
            &demo,
            Credentials::new("admin@example.com", "letmein!"),
            collect_states(&mut states),
        )
        .await;

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], AuthState::Submitting);
        assert_eq!(states[1].user().map(|u| u.email.as_str()), Some("admin@example.com"));
    }

    #[tokio::test]
    async fn wrong_credentials_go_submitting_then_error() {
        let demo = DemoAuthenticator::with_delay(Duration::ZERO);
        let mut states = Vec::new();

        run_login(
            &demo,
            Credentials::new("wrong@x.com", "letmein!"),
            collect_states(&mut states),
        )
        .await;

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], AuthState::Submitting);
        assert_eq!(
            states[1].error_message(),
            Some("Invalid email or password. Try admin@example.com / letmein!")
        );
    }

    #[tokio::test]
    async fn credentials_are_normalized_before_the_call() {
        let demo = DemoAuthenticator::with_delay(Duration::ZERO);
        let mut states = Vec::new();

        // Mixed case and padding still matches the demo pair.
        run_login(
            &demo,
            Credentials::new("  ADMIN@Example.com ", "letmein!"),
            collect_states(&mut states),
        )
        .await;

        assert!(states[1].user().is_some());
    }

    #[tokio::test]
    async fn publishes_exactly_one_outcome_per_call() {
        let authenticator = CountingAuthenticator::succeeding();
        let mut states = Vec::new();

        run_login(
            &authenticator,
            Credentials::new("test@example.com", "password1"),
            collect_states(&mut states),
        )
        .await;

        assert_eq!(authenticator.calls.get(), 1);
        assert_eq!(states.len(), 2);
    }
}
