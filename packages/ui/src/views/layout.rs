use dioxus::prelude::*;

use crate::components::{ToastHost, UnauthorizedModal};
use crate::Sidebar;

use super::VIEWS_CSS;

/// Shell around every signed-in page: sidebar, content, toasts and the
/// session-expired prompt.
#[component]
pub fn AdminLayoutView(
    active_path: String,
    /// The router outlet for child routes.
    children: Element,
    on_navigate: EventHandler<&'static str>,
    /// Called after logout or when the user accepts the session-expired prompt.
    on_signed_out: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "admin-shell",
            Sidebar {
                active_path,
                on_navigate,
                on_logged_out: on_signed_out,
            }
            main {
                class: "admin-content",
                {children}
            }
        }

        ToastHost {}
        UnauthorizedModal { on_sign_in: on_signed_out }
    }
}
