//! This crate contains all shared UI for the admin dashboard.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, Client};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod app;
pub use app::{
    use_app, use_auth_status, use_notifications, use_session, AppContext, AppProvider,
    LogoutButton,
};

mod hooks;
pub use hooks::{use_list, use_lookup, ListHandle};

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{NavItem, Sidebar, NAV_ITEMS};
