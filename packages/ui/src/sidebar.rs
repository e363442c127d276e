use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBed, FaBoxesStacked, FaCalendarDays, FaChartPie, FaFileLines, FaHandHoldingHeart, FaUsers,
};
use dioxus_free_icons::IconShape;

use crate::app::{use_session, LogoutButton};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { label: "Dashboard", path: "/dashboard" },
    NavItem { label: "Children & Caretakers", path: "/users" },
    NavItem { label: "Bedrooms", path: "/bedrooms" },
    NavItem { label: "Donations", path: "/donations" },
    NavItem { label: "Events", path: "/events" },
    NavItem { label: "Documents", path: "/documents" },
    NavItem { label: "Inventory", path: "/inventory" },
];

#[component]
fn NavIcon(path: &'static str) -> Element {
    fn icon<I: IconShape + Clone + PartialEq + 'static>(shape: I) -> Element {
        rsx! { Icon { icon: shape, width: 16, height: 16 } }
    }
    match path {
        "/users" => icon(FaUsers),
        "/bedrooms" => icon(FaBed),
        "/donations" => icon(FaHandHoldingHeart),
        "/events" => icon(FaCalendarDays),
        "/documents" => icon(FaFileLines),
        "/inventory" => icon(FaBoxesStacked),
        _ => icon(FaChartPie),
    }
}

#[component]
pub fn Sidebar(
    /// Path of the current page, used to highlight its entry.
    active_path: String,
    on_navigate: EventHandler<&'static str>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let session = use_session();
    let signed_in = session.read().is_signed_in();
    let name = session.read().display_name().to_string();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                span { class: "sidebar-brand-name", "Panti Admin" }
            }

            nav {
                class: "sidebar-nav",
                for item in NAV_ITEMS {
                    button {
                        key: "{item.path}",
                        class: if active_path.starts_with(item.path) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item.path),
                        NavIcon { path: item.path }
                        span { "{item.label}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                if signed_in {
                    span { class: "sidebar-user-name", "{name}" }
                }
                LogoutButton {
                    class: "sidebar-item",
                    on_logged_out: on_logged_out,
                }
            }
        }
    }
}
