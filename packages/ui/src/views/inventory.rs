use api::models::Inventory;
use api::{Inventories, LookupKind};
use dioxus::prelude::*;
use store::forms::InventoryForm;
use store::FieldErrors;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, ConfirmDialog, FormField, Input, SearchBox, Select, TextArea};
use crate::hooks::{use_list, use_lookup};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::{field_error, list_status, pagination_for, text_or_dash, type_options, ModalOverlay, VIEWS_CSS};

#[component]
pub fn InventoryListView() -> Element {
    let handle = use_list::<Inventories>();
    let types = use_lookup(LookupKind::InventoryType);
    let mut editing = use_signal(|| Option::<Option<Inventory>>::None);
    let mut pending_delete = use_signal(|| Option::<Inventory>::None);

    let list = handle.list.read();
    let inventory_type = list.filter("inventoryTypeId").unwrap_or_default().to_string();
    let items = list.items().to_vec();
    drop(list);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar {
            title: "Inventory",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(None)),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add item"
            }
        }

        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search items",
                oninput: move |text| handle.type_search(text),
            }
            Select {
                id: "inventory-type-filter",
                value: inventory_type,
                options: type_options(&types.read()),
                placeholder: "All types",
                onchange: move |v| handle.set_filter("inventoryTypeId", v),
            }
        }

        if let Some(status) = list_status(handle, "No inventory items") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { class: "numeric", "Quantity" }
                        th { "Description" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for item in items {
                        tr {
                            key: "{item.id}",
                            td { "{item.name}" }
                            td { {item.inventory_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()} }
                            td { class: "numeric", "{item.quantity} {item.unit.clone().unwrap_or_default()}" }
                            td { {text_or_dash(&item.description)} }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let item = item.clone();
                                        move |_| editing.set(Some(Some(item.clone())))
                                    },
                                    Icon { icon: FaPen, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete",
                                    onclick: {
                                        let item = item.clone();
                                        move |_| pending_delete.set(Some(item.clone()))
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

        if let Some(item) = editing() {
            InventoryDialog {
                item,
                on_saved: move |_| {
                    editing.set(None);
                    handle.refresh();
                },
                on_close: move |_| editing.set(None),
            }
        }

        if let Some(item) = pending_delete() {
            ConfirmDialog {
                title: "Delete item",
                message: format!("Delete {}?", item.name),
                on_confirm: move |_| {
                    handle.remove(item.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn InventoryDialog(item: Option<Inventory>, on_saved: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let app = use_app();
    let types = use_lookup(LookupKind::InventoryType);
    let mut form = use_signal(|| item.as_ref().map(InventoryForm::from_item).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let item_id = item.as_ref().map(|i| i.id.clone());
    let title = if item_id.is_some() { "Edit item" } else { "New item" };

    let handle_save = move |_| {
        let item_id = item_id.clone();
        let payload = match form.read().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);
        spawn(async move {
            let client = app.client();
            let result = match &item_id {
                Some(id) => client.update::<Inventories>(id, &payload).await,
                None => client.create::<Inventories>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    app.success("Item saved");
                    on_saved.call(());
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
        });
    };

    let current = form.read().clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                FormField {
                    label: "Name",
                    html_for: "inventory-name",
                    required: true,
                    error: field_error(errors, "name"),
                    Input {
                        id: "inventory-name",
                        value: current.name.clone(),
                        oninput: move |v| form.write().name = v,
                    }
                }
                FormField {
                    label: "Type",
                    html_for: "inventory-type",
                    required: true,
                    error: field_error(errors, "inventory_type_id"),
                    Select {
                        id: "inventory-type",
                        value: current.inventory_type_id.clone(),
                        options: type_options(&types.read()),
                        onchange: move |v| form.write().inventory_type_id = v,
                    }
                }
                div {
                    class: "form-row",
                    FormField {
                        label: "Quantity",
                        html_for: "inventory-quantity",
                        required: true,
                        error: field_error(errors, "quantity"),
                        Input {
                            id: "inventory-quantity",
                            r#type: "number",
                            value: current.quantity.clone(),
                            oninput: move |v| form.write().quantity = v,
                        }
                    }
                    FormField {
                        label: "Unit",
                        html_for: "inventory-unit",
                        error: field_error(errors, "unit"),
                        Input {
                            id: "inventory-unit",
                            placeholder: "pcs, kg, box",
                            value: current.unit.clone(),
                            oninput: move |v| form.write().unit = v,
                        }
                    }
                }
                FormField {
                    label: "Description",
                    html_for: "inventory-description",
                    error: field_error(errors, "description"),
                    TextArea {
                        id: "inventory-description",
                        value: current.description.clone(),
                        oninput: move |v| form.write().description = v,
                    }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        loading: saving(),
                        onclick: handle_save,
                        "Save"
                    }
                }
            }
        }
    }
}
