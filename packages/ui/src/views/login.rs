//! Sign-in page.

use dioxus::prelude::*;
use store::forms::LoginForm;
use store::{CurrentUser, FieldErrors};

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, FormField, Input, ToastHost};

use super::{field_error, VIEWS_CSS};

#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, on_forgot_password: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let current = form();
        if let Err(e) = current.check() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        submitting.set(true);

        let client = app.client();
        match client.login(&current.identifier, &current.password).await {
            Ok(response) => {
                let user = match response.user {
                    Some(user) => Some(user),
                    None => client.current_user().await.ok(),
                };
                let mut session = app.session;
                let mut auth = app.auth;
                session.set(user.map(CurrentUser::signed_in).unwrap_or_default());
                auth.write().reset();
                on_logged_in.call(());
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                errors.set(FieldErrors::from_api(&e));
                let mut notifications = app.notifications;
                notifications.write().error(e.user_message());
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
                h1 { class: "auth-title", "Panti Admin" }
                p { class: "auth-subtitle", "Sign in to manage the orphanage" }

                FormField {
                    label: "Email or username",
                    html_for: "login-identifier",
                    error: field_error(errors, "identifier"),
                    Input {
                        id: "login-identifier",
                        value: form.read().identifier.clone(),
                        invalid: errors.read().get("identifier").is_some(),
                        oninput: move |v| form.write().identifier = v,
                    }
                }
                FormField {
                    label: "Password",
                    html_for: "login-password",
                    error: field_error(errors, "password"),
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: form.read().password.clone(),
                        invalid: errors.read().get("password").is_some(),
                        oninput: move |v| form.write().password = v,
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "w-full",
                    loading: submitting(),
                    "Sign in"
                }
                button {
                    r#type: "button",
                    class: "auth-link",
                    onclick: move |_| on_forgot_password.call(()),
                    "Forgot password?"
                }
            }
        }

        ToastHost {}
    }
}
