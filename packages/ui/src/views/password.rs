//! Password recovery pages.

use dioxus::prelude::*;
use store::forms::{ForgotPasswordForm, ResetPasswordForm};
use store::FieldErrors;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, FormField, Input, ToastHost};

use super::{field_error, VIEWS_CSS};

#[component]
pub fn ForgotPasswordView(on_back: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(ForgotPasswordForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let current = form();
        if let Err(e) = current.check() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        submitting.set(true);
        match app.client().forgot_password(&current.email).await {
            Ok(()) => sent.set(true),
            Err(e) => {
                errors.set(FieldErrors::from_api(&e));
                app.report(&e);
            }
        }
        submitting.set(false);
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_submit,
                h1 { class: "auth-title", "Forgot password" }
                if sent() {
                    p { class: "auth-subtitle", "If the address is registered, a reset link is on its way." }
                } else {
                    p { class: "auth-subtitle", "Enter your email to receive a reset link." }
                    FormField {
                        label: "Email",
                        html_for: "forgot-email",
                        error: field_error(errors, "email"),
                        Input {
                            id: "forgot-email",
                            r#type: "email",
                            value: form.read().email.clone(),
                            oninput: move |v| form.write().email = v,
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "w-full",
                        loading: submitting(),
                        "Send reset link"
                    }
                }
                button {
                    r#type: "button",
                    class: "auth-link",
                    onclick: move |_| on_back.call(()),
                    "Back to sign in"
                }
            }
        }

        ToastHost {}
    }
}

#[component]
pub fn ResetPasswordView(token: String, on_done: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(ResetPasswordForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let token = token.clone();
        async move {
            evt.prevent_default();
            let current = form();
            if let Err(e) = current.check() {
                errors.set(e);
                return;
            }
            errors.set(FieldErrors::new());
            submitting.set(true);
            match app.client().reset_password(&token, &current.password).await {
                Ok(()) => {
                    app.success("Password updated, please sign in");
                    on_done.call(());
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_submit,
                h1 { class: "auth-title", "Choose a new password" }
                FormField {
                    label: "New password",
                    html_for: "reset-password",
                    error: field_error(errors, "password"),
                    Input {
                        id: "reset-password",
                        r#type: "password",
                        value: form.read().password.clone(),
                        oninput: move |v| form.write().password = v,
                    }
                }
                FormField {
                    label: "Confirm password",
                    html_for: "reset-confirm",
                    error: field_error(errors, "confirm"),
                    Input {
                        id: "reset-confirm",
                        r#type: "password",
                        value: form.read().confirm.clone(),
                        oninput: move |v| form.write().confirm = v,
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "w-full",
                    loading: submitting(),
                    "Update password"
                }
            }
        }

        ToastHost {}
    }
}
