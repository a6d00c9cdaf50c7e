//! The credential form.
//!
//! All form logic lives in [`auth::CredentialForm`]; this component only
//! feeds it events and renders what it derives. Field errors appear once a
//! field has been visited (or after a submit attempt), the whole form locks
//! while a sign-in is in flight, and a successful sign-in resets it to a
//! pristine state.

use auth::{error_message, CredentialForm, Field};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowsRotate, FaEye, FaEyeSlash};
use dioxus_free_icons::Icon;

use crate::session::{submit_credentials, use_session};

/// Email/password sign-in form. `with_challenge` adds the arithmetic
/// challenge row.
#[component]
pub fn LoginForm(#[props(default = false)] with_challenge: bool) -> Element {
    let session = use_session();
    let mut form = use_signal(move || {
        if with_challenge {
            CredentialForm::with_challenge()
        } else {
            CredentialForm::new()
        }
    });

    // A successful sign-in leaves a fresh form behind for the next session.
    use_effect(move || {
        if session.read().user().is_some() {
            form.write().reset();
        }
    });

    let submitting = session.read().is_submitting();
    let alert = session.read().error_message().map(str::to_string);

    let values = form.read().values.clone();
    let show_password = form.read().show_password;
    let question = form.read().challenge.as_ref().map(|c| c.question.clone());
    let email_error = form
        .read()
        .visible_error(Field::Email)
        .map(|e| error_message(Field::Email, e));
    let password_error = form
        .read()
        .visible_error(Field::Password)
        .map(|e| error_message(Field::Password, e));
    let challenge_error = form
        .read()
        .visible_error(Field::Challenge)
        .map(|e| error_message(Field::Challenge, e));
    let can_submit = form.read().is_valid() && !submitting;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(credentials) = form.write().submit() else {
            tracing::debug!("submit blocked by field validation");
            return;
        };
        spawn(async move {
            submit_credentials(session, credentials).await;
        });
    };

    rsx! {
        form {
            class: "login-form",
            novalidate: true,
            onsubmit: handle_submit,

            header { class: "login-form__header",
                h1 { "Sign in to your account" }
                p { "Please enter your details to continue." }
            }

            div { class: "form-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    autocomplete: "email",
                    placeholder: "you@example.com",
                    value: "{values.email}",
                    disabled: submitting,
                    aria_invalid: email_error.is_some().to_string(),
                    aria_describedby: "email-error",
                    oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                    onfocusout: move |_| form.write().touch(Field::Email),
                }
                if let Some(message) = email_error {
                    span { id: "email-error", role: "alert", class: "field-error", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "password", "Password" }
                div { class: "password-field",
                    input {
                        id: "password",
                        name: "password",
                        r#type: if show_password { "text" } else { "password" },
                        autocomplete: "current-password",
                        placeholder: "********",
                        value: "{values.password}",
                        disabled: submitting,
                        aria_invalid: password_error.is_some().to_string(),
                        aria_describedby: "password-error",
                        oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
                        onfocusout: move |_| form.write().touch(Field::Password),
                    }
                    button {
                        r#type: "button",
                        class: "toggle-password",
                        aria_label: if show_password { "Hide password" } else { "Show password" },
                        onclick: move |_| form.write().toggle_password_visibility(),
                        if show_password {
                            Icon { icon: FaEyeSlash, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaEye, width: 16, height: 16 }
                        }
                    }
                }
                if let Some(message) = password_error {
                    span { id: "password-error", role: "alert", class: "field-error", "{message}" }
                }
            }

            if let Some(question) = question {
                div { class: "form-field",
                    label { r#for: "challenge", "What is {question}?" }
                    div { class: "challenge-field",
                        input {
                            id: "challenge",
                            name: "challenge",
                            r#type: "text",
                            inputmode: "numeric",
                            placeholder: "Your answer",
                            value: "{values.challenge_answer}",
                            disabled: submitting,
                            aria_invalid: challenge_error.is_some().to_string(),
                            aria_describedby: "challenge-error",
                            oninput: move |evt: FormEvent| form.write().set_challenge_answer(evt.value()),
                            onfocusout: move |_| form.write().touch(Field::Challenge),
                        }
                        button {
                            r#type: "button",
                            class: "refresh-challenge",
                            aria_label: "New question",
                            disabled: submitting,
                            onclick: move |_| form.write().refresh_challenge(),
                            Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        }
                    }
                    if let Some(message) = challenge_error {
                        span { id: "challenge-error", role: "alert", class: "field-error", "{message}" }
                    }
                }
            }

            if let Some(message) = alert {
                div { class: "form-alert", role: "alert", "{message}" }
            }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: !can_submit,
                if submitting { "Signing in…" } else { "Sign in" }
            }
        }
    }
}
