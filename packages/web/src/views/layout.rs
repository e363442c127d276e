use dioxus::prelude::*;
use store::{guard, Access};
use ui::use_app;
use ui::views::AdminLayoutView;

use super::push_path;
use crate::Route;

/// Applies the route guard to everything below it.
///
/// Reads the session signal so sign-in and sign-out re-run the check.
#[component]
pub fn Guarded() -> Element {
    let app = use_app();
    let route = use_route::<Route>();
    let nav = use_navigator();
    let _ = app.session.read();

    match guard(&route.to_string(), app.has_token()) {
        Access::Allow => rsx! { Outlet::<Route> {} },
        Access::Redirect(target) => {
            tracing::debug!("guard: {route} -> {target}");
            if let Ok(target) = target.parse::<Route>() {
                nav.replace(target);
            }
            rsx! {}
        }
    }
}

/// Sidebar shell for signed-in pages.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        AdminLayoutView {
            active_path: route.to_string(),
            on_navigate: move |path: &'static str| push_path(nav, path),
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
