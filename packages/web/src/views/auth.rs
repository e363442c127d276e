use dioxus::prelude::*;
use ui::views::{ForgotPasswordView, LoginView, ResetPasswordView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_logged_in: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_forgot_password: move |_| {
                nav.push(Route::ForgotPassword {});
            },
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();
    rsx! {
        ForgotPasswordView {
            on_back: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ResetPassword(token: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ResetPasswordView {
            token,
            on_done: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
