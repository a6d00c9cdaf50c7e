//! Credential form state model.
//!
//! [`CredentialForm`] owns what the user has typed, which fields they have
//! visited, the password-visibility flag, and (in the challenge variant) the
//! current [`Challenge`]. Field errors are never stored: [`CredentialForm::errors`]
//! derives them from the current values on every call, and display gating is
//! a separate concern handled by [`CredentialForm::visible_error`].

use crate::authenticator::Credentials;
use crate::challenge::Challenge;
use crate::validate::{
    validate_challenge_answer, validate_email, validate_password, ValidationError,
};

/// Raw input values, mutated on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub challenge_answer: String,
}

/// Per-field "has received and lost focus" flags. A submit attempt forces all
/// of them on so every problem becomes visible at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFlags {
    pub email: bool,
    pub password: bool,
    pub challenge: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Challenge,
}

/// Derived validation state for the whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub challenge: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.challenge.is_none()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::Challenge => self.challenge,
        }
    }
}

/// Inline message for a field error.
pub fn error_message(field: Field, error: ValidationError) -> &'static str {
    match field {
        Field::Email => match error {
            ValidationError::EmptyField => "Email is required",
            _ => "Enter a valid email address",
        },
        Field::Password => match error {
            ValidationError::EmptyField => "Password is required",
            _ => "Password must be at least 8 characters",
        },
        Field::Challenge => match error {
            ValidationError::EmptyField => "Answer the question to continue",
            _ => "That answer is not right, try again",
        },
    }
}

/// State behind the login form.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialForm {
    pub values: FormValues,
    pub touched: TouchedFlags,
    pub show_password: bool,
    pub challenge: Option<Challenge>,
}

impl CredentialForm {
    /// Plain email/password variant.
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            touched: TouchedFlags::default(),
            show_password: false,
            challenge: None,
        }
    }

    /// Variant with the arithmetic challenge row.
    pub fn with_challenge() -> Self {
        Self {
            challenge: Some(Challenge::generate()),
            ..Self::new()
        }
    }

    pub fn set_email(&mut self, value: String) {
        self.values.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.values.password = value;
    }

    pub fn set_challenge_answer(&mut self, value: String) {
        self.values.challenge_answer = value;
    }

    /// Mark a field visited (blur). Never reverts except through [`reset`]
    /// or, for the challenge flag, [`refresh_challenge`].
    ///
    /// [`reset`]: Self::reset
    /// [`refresh_challenge`]: Self::refresh_challenge
    pub fn touch(&mut self, field: Field) {
        match field {
            Field::Email => self.touched.email = true,
            Field::Password => self.touched.password = true,
            Field::Challenge => self.touched.challenge = true,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Recompute all field errors from the current values.
    pub fn errors(&self) -> FieldErrors {
        FieldErrors {
            email: validate_email(&self.values.email),
            password: validate_password(&self.values.password),
            challenge: self
                .challenge
                .as_ref()
                .and_then(|c| validate_challenge_answer(&self.values.challenge_answer, c.answer)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_clear()
    }

    /// A field's error, surfaced only once that field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        let touched = match field {
            Field::Email => self.touched.email,
            Field::Password => self.touched.password,
            Field::Challenge => self.touched.challenge,
        };
        if touched {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Submit attempt: force every field touched, then hand out the
    /// credential pair only if validation is clear. The challenge answer
    /// never leaves the form.
    pub fn submit(&mut self) -> Option<Credentials> {
        self.touched = TouchedFlags {
            email: true,
            password: true,
            challenge: true,
        };

        if !self.is_valid() {
            return None;
        }

        Some(Credentials::new(
            self.values.email.clone(),
            self.values.password.clone(),
        ))
    }

    /// Replace the challenge and clear only its field and touched flag.
    /// No-op in the plain variant.
    pub fn refresh_challenge(&mut self) {
        if self.challenge.is_none() {
            return;
        }
        self.challenge = Some(Challenge::generate());
        self.values.challenge_answer.clear();
        self.touched.challenge = false;
    }

    /// Back to a pristine form after a successful sign-in: values and touched
    /// flags cleared, password hidden, fresh challenge in the challenge
    /// variant.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched = TouchedFlags::default();
        self.show_password = false;
        if self.challenge.is_some() {
            self.challenge = Some(Challenge::generate());
        }
    }
}

impl Default for CredentialForm {
    fn default() -> Self {
        Self::new()
    }
}
