use api::models::User;
use api::Users;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ConfirmDialog, SearchBox, Select, SelectOption};
use crate::hooks::use_list;
use crate::icons::{FaEye, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::{list_status, pagination_for, VIEWS_CSS};

/// Children and caretakers share the users collection, told apart by role.
#[component]
pub fn UserListView(on_open: EventHandler<String>, on_create: EventHandler<()>) -> Element {
    let handle = use_list::<Users>();
    let mut pending_delete = use_signal(|| Option::<User>::None);

    let role_options = vec![
        SelectOption::new("child", "Children"),
        SelectOption::new("caretaker", "Caretakers"),
        SelectOption::new("admin", "Administrators"),
    ];
    let status_options = vec![
        SelectOption::new("true", "Active"),
        SelectOption::new("false", "Inactive"),
    ];

    let list = handle.list.read();
    let role = list.filter("role").unwrap_or_default().to_string();
    let active = list.filter("isActive").unwrap_or_default().to_string();
    let users = list.items().to_vec();
    drop(list);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar {
            title: "Children & Caretakers",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_create.call(()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add user"
            }
        }

        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search name, username or email",
                oninput: move |text| handle.type_search(text),
            }
            Select {
                id: "user-role-filter",
                value: role,
                options: role_options,
                placeholder: "All roles",
                onchange: move |v| handle.set_filter("role", v),
            }
            Select {
                id: "user-status-filter",
                value: active,
                options: status_options,
                placeholder: "Any status",
                onchange: move |v| handle.set_filter("isActive", v),
            }
        }

        if let Some(status) = list_status(handle, "No users found") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Username" }
                        th { "Email" }
                        th { "Roles" }
                        th { "Status" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for user in users {
                        tr {
                            key: "{user.id}",
                            td { "{user.display_name()}" }
                            td { "{user.credentials.username}" }
                            td { "{user.credentials.email}" }
                            td { "{user.role_names()}" }
                            td {
                                span {
                                    class: if user.credentials.is_active { "badge badge-success" } else { "badge badge-muted" },
                                    if user.credentials.is_active { "Active" } else { "Inactive" }
                                }
                            }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Open",
                                    onclick: {
                                        let id = user.id.clone();
                                        move |_| on_open.call(id.clone())
                                    },
                                    Icon { icon: FaEye, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| pending_delete.set(Some(user.clone()))
                                    },
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }

        {pagination_for(handle)}

        if let Some(user) = pending_delete() {
            ConfirmDialog {
                title: "Delete user",
                message: format!("Delete {}? This cannot be undone.", user.display_name()),
                on_confirm: move |_| {
                    handle.remove(user.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
