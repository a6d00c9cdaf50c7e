//! The authentication boundary.
//!
//! [`Authenticate`] is the black-box async call the session driver awaits.
//! The only implementation shipped here is [`DemoAuthenticator`], an
//! in-memory check behind a fixed delay: it accepts exactly one hard-coded
//! credential pair and rejects everything else with a fixed message. A real
//! backend would implement the same trait over a network call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::session::User;

/// The one email/password pair the demo backend accepts.
pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "letmein!";

const DEMO_USER_NAME: &str = "Admin User";
const REJECTION_MESSAGE: &str = "Invalid email or password. Try admin@example.com / letmein!";

/// An email/password pair as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Canonical form handed to the authenticator: email trimmed and
    /// lower-cased, password trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_ascii_lowercase(),
            password: self.password.trim().to_string(),
        }
    }
}

/// Async boundary to whatever verifies credentials.
///
/// Callers pass already-normalized credentials (see [`Credentials::normalized`];
/// the session driver takes care of it). Resolves exactly once per call; there
/// is no cancellation.
#[allow(async_fn_in_trait)]
pub trait Authenticate {
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AuthError>;
}

/// Simulated backend: accepts only [`DEMO_EMAIL`] / [`DEMO_PASSWORD`] after a
/// fixed delay (1 s by default).
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    delay: Duration,
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

impl DemoAuthenticator {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Authenticate for DemoAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AuthError> {
        sleep(self.delay).await;

        if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
            Ok(User {
                name: DEMO_USER_NAME.to_string(),
                email: credentials.email,
            })
        } else {
            Err(AuthError::new(REJECTION_MESSAGE))
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
