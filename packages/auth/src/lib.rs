//! # Auth crate — sign-in state machine and credential form model
//!
//! Framework-free core behind the SecurePortal login screen. Everything the
//! UI renders is derived from the types in this crate:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | `AuthState` (idle/submitting/success/error) and the `run_login` driver |
//! | [`authenticator`] | The `Authenticate` boundary, `Credentials` normalization, and the demo backend |
//! | [`form`] | `CredentialForm` — input values, touched flags, derived errors, submit gating |
//! | [`validate`] | Pure per-field validation rules |
//! | [`challenge`] | The arithmetic sign-in challenge |
//!
//! There is no server and no persistence here: the demo authenticator is an
//! in-memory check behind an artificial delay, and every state value lives in
//! whatever signal or variable the caller keeps it in.

pub mod authenticator;
pub mod challenge;
mod error;
pub mod form;
pub mod session;
pub mod validate;

pub use authenticator::{Authenticate, Credentials, DemoAuthenticator};
pub use challenge::Challenge;
pub use error::AuthError;
pub use form::{error_message, CredentialForm, Field, FieldErrors, FormValues, TouchedFlags};
pub use session::{run_login, AuthState, User};
pub use validate::ValidationError;
