use api::models::BedRoom;
use api::{BedRooms, LookupKind};
use dioxus::prelude::*;
use store::forms::BedRoomForm;
use store::FieldErrors;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, ConfirmDialog, FormField, Input, SearchBox, Select, TextArea};
use crate::hooks::{use_list, use_lookup};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::{field_error, list_status, pagination_for, text_or_dash, type_options, ModalOverlay, VIEWS_CSS};

/// Which dialog is open: `Some(None)` creates, `Some(Some(room))` edits.
type Editing = Option<Option<BedRoom>>;

#[component]
pub fn BedRoomListView() -> Element {
    let handle = use_list::<BedRooms>();
    let types = use_lookup(LookupKind::BedRoomType);
    let mut editing = use_signal(|| Editing::None);
    let mut pending_delete = use_signal(|| Option::<BedRoom>::None);

    let list = handle.list.read();
    let room_type = list.filter("bedRoomTypeId").unwrap_or_default().to_string();
    let rooms = list.items().to_vec();
    drop(list);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar {
            title: "Bedrooms",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(None)),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add bedroom"
            }
        }

        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search bedrooms",
                oninput: move |text| handle.type_search(text),
            }
            Select {
                id: "bedroom-type-filter",
                value: room_type,
                options: type_options(&types.read()),
                placeholder: "All types",
                onchange: move |v| handle.set_filter("bedRoomTypeId", v),
            }
        }

        if let Some(status) = list_status(handle, "No bedrooms yet") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Occupancy" }
                        th { "Note" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for room in rooms {
                        tr {
                            key: "{room.id}",
                            td { "{room.name}" }
                            td { {room.bed_room_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()} }
                            td {
                                span {
                                    class: if room.is_full() { "badge badge-muted" } else { "badge badge-success" },
                                    "{room.occupied} / {room.capacity}"
                                }
                            }
                            td { {text_or_dash(&room.note)} }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let room = room.clone();
                                        move |_| editing.set(Some(Some(room.clone())))
                                    },
                                    Icon { icon: FaPen, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete",
                                    onclick: {
                                        let room = room.clone();
                                        move |_| pending_delete.set(Some(room.clone()))
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

        if let Some(room) = editing() {
            BedRoomDialog {
                room,
                on_saved: move |_| {
                    editing.set(None);
                    handle.refresh();
                },
                on_close: move |_| editing.set(None),
            }
        }

        if let Some(room) = pending_delete() {
            ConfirmDialog {
                title: "Delete bedroom",
                message: format!("Delete {}?", room.name),
                on_confirm: move |_| {
                    handle.remove(room.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn BedRoomDialog(room: Option<BedRoom>, on_saved: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let app = use_app();
    let types = use_lookup(LookupKind::BedRoomType);
    let mut form = use_signal(|| room.as_ref().map(BedRoomForm::from_item).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let room_id = room.as_ref().map(|r| r.id.clone());
    let title = if room_id.is_some() { "Edit bedroom" } else { "New bedroom" };

    let handle_save = move |_| {
        let room_id = room_id.clone();
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
            let result = match &room_id {
                Some(id) => client.update::<BedRooms>(id, &payload).await,
                None => client.create::<BedRooms>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    app.success("Bedroom saved");
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
                    html_for: "bedroom-name",
                    required: true,
                    error: field_error(errors, "name"),
                    Input {
                        id: "bedroom-name",
                        value: current.name.clone(),
                        oninput: move |v| form.write().name = v,
                    }
                }
                FormField {
                    label: "Capacity",
                    html_for: "bedroom-capacity",
                    required: true,
                    error: field_error(errors, "capacity"),
                    Input {
                        id: "bedroom-capacity",
                        r#type: "number",
                        value: current.capacity.clone(),
                        oninput: move |v| form.write().capacity = v,
                    }
                }
                FormField {
                    label: "Type",
                    html_for: "bedroom-type",
                    error: field_error(errors, "bed_room_type_id"),
                    Select {
                        id: "bedroom-type",
                        value: current.bed_room_type_id.clone(),
                        options: type_options(&types.read()),
                        onchange: move |v| form.write().bed_room_type_id = v,
                    }
                }
                FormField {
                    label: "Note",
                    html_for: "bedroom-note",
                    error: field_error(errors, "note"),
                    TextArea {
                        id: "bedroom-note",
                        value: current.note.clone(),
                        oninput: move |v| form.write().note = v,
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
