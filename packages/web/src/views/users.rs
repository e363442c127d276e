use dioxus::prelude::*;
use ui::views::{UserDetailView, UserFormView, UserListView};

use crate::Route;

#[component]
pub fn Users() -> Element {
    let nav = use_navigator();
    rsx! {
        UserListView {
            on_open: move |id| {
                nav.push(Route::UserDetail { id });
            },
            on_create: move |_| {
                nav.push(Route::UserCreate {});
            },
        }
    }
}

#[component]
pub fn UserCreate() -> Element {
    let nav = use_navigator();
    rsx! {
        UserFormView {
            user_id: None,
            on_saved: move |id| {
                nav.replace(Route::UserDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::Users {});
            },
        }
    }
}

#[component]
pub fn UserDetail(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        UserDetailView {
            user_id: id,
            on_edit: move |id| {
                nav.push(Route::UserEdit { id });
            },
            on_deleted: move |_| {
                nav.replace(Route::Users {});
            },
        }
    }
}

#[component]
pub fn UserEdit(id: String) -> Element {
    let nav = use_navigator();
    let back = id.clone();
    rsx! {
        UserFormView {
            key: "{id}",
            user_id: Some(id),
            on_saved: move |id| {
                nav.replace(Route::UserDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::UserDetail { id: back.clone() });
            },
        }
    }
}
