use dioxus::prelude::*;

use ui::AppProvider;
use views::{
    BedRooms, Dashboard, Documents, DonationCreate, DonationEdit, Donations,
    EventCreate, EventEdit, Events, ForgotPassword, Guarded, Inventory, Login, NotFound,
    ResetPassword, Shell, UserCreate, UserDetail, UserEdit, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/reset-password?:token")]
        ResetPassword { token: String },
        #[layout(Shell)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/users")]
            Users {},
            #[route("/users/new")]
            UserCreate {},
            #[route("/users/:id")]
            UserDetail { id: String },
            #[route("/users/:id/edit")]
            UserEdit { id: String },
            #[route("/bedrooms")]
            BedRooms {},
            #[route("/donations")]
            Donations {},
            #[route("/donations/new")]
            DonationCreate {},
            #[route("/donations/:id/edit")]
            DonationEdit { id: String },
            #[route("/events")]
            Events {},
            #[route("/events/new")]
            EventCreate {},
            #[route("/events/:id/edit")]
            EventEdit { id: String },
            #[route("/documents")]
            Documents {},
            #[route("/inventory")]
            Inventory {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AppProvider {
            Router::<Route> {}
        }
    }
}

/// `/` has no page of its own; the guard sends it to the dashboard or login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{guard, Access, DASHBOARD_PATH, LOGIN_PATH};

    #[test]
    fn test_sidebar_paths_are_routes() {
        for item in ui::NAV_ITEMS {
            let route: Route = item.path.parse().unwrap();
            assert_eq!(route.to_string(), item.path);
        }
    }

    #[test]
    fn test_guard_targets_are_routes() {
        assert_eq!(LOGIN_PATH.parse::<Route>().unwrap(), Route::Login {});
        assert_eq!(DASHBOARD_PATH.parse::<Route>().unwrap(), Route::Dashboard {});
    }

    #[test]
    fn test_reset_link_carries_token() {
        let route: Route = "/reset-password?token=abc123".parse().unwrap();
        assert_eq!(
            route,
            Route::ResetPassword {
                token: "abc123".to_string()
            }
        );
        assert_eq!(guard(&route.to_string(), false), Access::Allow);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/nowhere/here".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }

    #[test]
    fn test_record_routes_need_a_session() {
        let route = Route::UserDetail { id: "7".to_string() };
        assert_eq!(route.to_string(), "/users/7");
        assert_eq!(guard(&route.to_string(), false), Access::Redirect(LOGIN_PATH));
        assert_eq!(guard(&route.to_string(), true), Access::Allow);
    }
}
