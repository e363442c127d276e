use dioxus::prelude::*;
use ui::views::{
    BedRoomListView, DashboardView, DocumentListView, DonationFormView, DonationListView,
    EventFormView, EventListView, InventoryListView,
};

use super::push_path;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView { on_navigate: move |path: &'static str| push_path(nav, path) }
    }
}

#[component]
pub fn BedRooms() -> Element {
    rsx! { BedRoomListView {} }
}

#[component]
pub fn Donations() -> Element {
    let nav = use_navigator();
    rsx! {
        DonationListView {
            on_create: move |_| {
                nav.push(Route::DonationCreate {});
            },
            on_edit: move |id| {
                nav.push(Route::DonationEdit { id });
            },
        }
    }
}

#[component]
pub fn DonationCreate() -> Element {
    let nav = use_navigator();
    rsx! {
        DonationFormView {
            donation_id: None,
            on_done: move |_| {
                nav.push(Route::Donations {});
            },
        }
    }
}

#[component]
pub fn DonationEdit(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        DonationFormView {
            key: "{id}",
            donation_id: Some(id.clone()),
            on_done: move |_| {
                nav.push(Route::Donations {});
            },
        }
    }
}

#[component]
pub fn Events() -> Element {
    let nav = use_navigator();
    rsx! {
        EventListView {
            on_create: move |_| {
                nav.push(Route::EventCreate {});
            },
            on_edit: move |id| {
                nav.push(Route::EventEdit { id });
            },
        }
    }
}

#[component]
pub fn EventCreate() -> Element {
    let nav = use_navigator();
    rsx! {
        EventFormView {
            event_id: None,
            on_done: move |_| {
                nav.push(Route::Events {});
            },
        }
    }
}

#[component]
pub fn EventEdit(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        EventFormView {
            key: "{id}",
            event_id: Some(id.clone()),
            on_done: move |_| {
                nav.push(Route::Events {});
            },
        }
    }
}

#[component]
pub fn Documents() -> Element {
    rsx! { DocumentListView {} }
}

#[component]
pub fn Inventory() -> Element {
    rsx! { InventoryListView {} }
}
