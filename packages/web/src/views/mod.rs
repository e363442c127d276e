//! Route components. Each one hands navigation callbacks to a screen from
//! the `ui` crate; the screens themselves know nothing about `Route`.

mod layout;
pub use layout::{Guarded, Shell};

mod auth;
pub use auth::{ForgotPassword, Login, ResetPassword};

mod users;
pub use users::{UserCreate, UserDetail, UserEdit, Users};

mod records;
pub use records::{
    BedRooms, Dashboard, Documents, DonationCreate, DonationEdit, Donations, EventCreate,
    EventEdit, Events, Inventory,
};

mod not_found;
pub use not_found::NotFound;

use dioxus::router::Navigator;

use crate::Route;

/// Push a sidebar or dashboard path, ignoring paths the router does not know.
pub(crate) fn push_path(nav: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("unknown path {path}: {e}"),
    }
}
