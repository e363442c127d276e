use dioxus::prelude::*;
use store::Level;

use crate::app::{use_app, use_auth_status, use_notifications};
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaInbox, FaXmark};
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            span { class: "spinner-ring" }
            span { class: "spinner-label", "{label}" }
        }
    }
}

/// Shown when a list fetch returned zero records.
#[component]
pub fn EmptyState(
    #[props(default = "No data found".to_string())] title: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaInbox, width: 32, height: 32 }
            p { class: "empty-state-title", "{title}" }
            if !hint.is_empty() {
                p { class: "empty-state-hint", "{hint}" }
            }
        }
    }
}

/// Renders the notification queue in a corner stack.
#[component]
pub fn ToastHost() -> Element {
    let mut notifications = use_notifications();
    let items = notifications.read().items().to_vec();

    rsx! {
        div {
            class: "toast-host",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.level.css_class()}",
                    {match toast.level {
                        Level::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                        Level::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                        Level::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
                    }}
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| notifications.write().dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// Blocking prompt raised by a 401 from any request.
#[component]
pub fn UnauthorizedModal(on_sign_in: EventHandler<()>) -> Element {
    let app = use_app();
    let auth = use_auth_status();

    if !auth.read().unauthorized {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            on_close: move |_| {},
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Session expired" }
                p { "Your session is no longer valid. Please sign in again to continue." }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            app.expire_session();
                            on_sign_in.call(());
                        },
                        "Sign in again"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
