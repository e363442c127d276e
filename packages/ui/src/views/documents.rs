//! Documents on file and the document-type lookup they reference.

use api::models::{Document, TypeRef};
use api::{DocumentTypes, Documents, LookupKind};
use dioxus::prelude::*;
use store::forms::{format_date, DocumentForm, DocumentTypeForm};
use store::FieldErrors;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, ConfirmDialog, FormField, Input, SearchBox, Select};
use crate::hooks::{use_list, use_lookup};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::{field_error, list_status, pagination_for, type_options, ModalOverlay, VIEWS_CSS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Documents,
    Types,
}

#[component]
pub fn DocumentListView() -> Element {
    let mut tab = use_signal(|| Tab::Documents);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar { title: "Documents" }

        div {
            class: "tabs",
            button {
                class: if tab() == Tab::Documents { "tab active" } else { "tab" },
                onclick: move |_| tab.set(Tab::Documents),
                "Documents"
            }
            button {
                class: if tab() == Tab::Types { "tab active" } else { "tab" },
                onclick: move |_| tab.set(Tab::Types),
                "Document types"
            }
        }

        if tab() == Tab::Documents {
            DocumentsPanel {}
        } else {
            DocumentTypesPanel {}
        }
    }
}

#[component]
fn DocumentsPanel() -> Element {
    let handle = use_list::<Documents>();
    let types = use_lookup(LookupKind::DocumentType);
    let mut editing = use_signal(|| Option::<Option<Document>>::None);
    let mut pending_delete = use_signal(|| Option::<Document>::None);

    let list = handle.list.read();
    let document_type = list.filter("documentTypeId").unwrap_or_default().to_string();
    let documents = list.items().to_vec();
    drop(list);

    rsx! {
        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search documents",
                oninput: move |text| handle.type_search(text),
            }
            Select {
                id: "document-type-filter",
                value: document_type,
                options: type_options(&types.read()),
                placeholder: "All types",
                onchange: move |v| handle.set_filter("documentTypeId", v),
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(None)),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add document"
            }
        }

        if let Some(status) = list_status(handle, "No documents yet") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Uploaded" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for doc in documents {
                        tr {
                            key: "{doc.id}",
                            td {
                                if let Some(url) = doc.url.clone() {
                                    a { href: "{url}", target: "_blank", "{doc.name}" }
                                } else {
                                    "{doc.name}"
                                }
                            }
                            td { {doc.document_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()} }
                            td { {format_date(doc.uploaded_at)} }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let doc = doc.clone();
                                        move |_| editing.set(Some(Some(doc.clone())))
                                    },
                                    Icon { icon: FaPen, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete",
                                    onclick: {
                                        let doc = doc.clone();
                                        move |_| pending_delete.set(Some(doc.clone()))
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

        if let Some(document) = editing() {
            DocumentDialog {
                document,
                on_saved: move |_| {
                    editing.set(None);
                    handle.refresh();
                },
                on_close: move |_| editing.set(None),
            }
        }

        if let Some(doc) = pending_delete() {
            ConfirmDialog {
                title: "Delete document",
                message: format!("Delete {}?", doc.name),
                on_confirm: move |_| {
                    handle.remove(doc.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Create or edit a document. New documents are attached to `user_id` when set.
#[component]
pub(super) fn DocumentDialog(
    document: Option<Document>,
    #[props(default)] user_id: String,
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let app = use_app();
    let types = use_lookup(LookupKind::DocumentType);
    let mut form = use_signal(|| match &document {
        Some(document) => DocumentForm::from_item(document),
        None => DocumentForm::for_user(&user_id),
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let document_id = document.as_ref().map(|d| d.id.clone());
    let title = if document_id.is_some() { "Edit document" } else { "New document" };

    let handle_save = move |_| {
        let document_id = document_id.clone();
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
            let result = match &document_id {
                Some(id) => client.update::<Documents>(id, &payload).await,
                None => client.create::<Documents>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    app.success("Document saved");
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
                    html_for: "document-name",
                    required: true,
                    error: field_error(errors, "name"),
                    Input {
                        id: "document-name",
                        value: current.name.clone(),
                        oninput: move |v| form.write().name = v,
                    }
                }
                FormField {
                    label: "Type",
                    html_for: "document-type",
                    required: true,
                    error: field_error(errors, "document_type_id"),
                    Select {
                        id: "document-type",
                        value: current.document_type_id.clone(),
                        options: type_options(&types.read()),
                        onchange: move |v| form.write().document_type_id = v,
                    }
                }
                FormField {
                    label: "Link",
                    html_for: "document-url",
                    required: true,
                    error: field_error(errors, "url"),
                    Input {
                        id: "document-url",
                        r#type: "url",
                        placeholder: "https://",
                        value: current.url.clone(),
                        oninput: move |v| form.write().url = v,
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

#[component]
fn DocumentTypesPanel() -> Element {
    let handle = use_list::<DocumentTypes>();
    let mut editing = use_signal(|| Option::<Option<TypeRef>>::None);
    let mut pending_delete = use_signal(|| Option::<TypeRef>::None);
    let types = handle.list.read().items().to_vec();

    rsx! {
        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search types",
                oninput: move |text| handle.type_search(text),
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(None)),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add type"
            }
        }

        if let Some(status) = list_status(handle, "No document types yet") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for item in types {
                        tr {
                            key: "{item.id}",
                            td { "{item.name}" }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Rename",
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
            DocumentTypeDialog {
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
                title: "Delete document type",
                message: format!("Delete {}? Documents of this type keep their files.", item.name),
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
fn DocumentTypeDialog(item: Option<TypeRef>, on_saved: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let app = use_app();
    let mut form = use_signal(|| item.as_ref().map(DocumentTypeForm::from_item).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let item_id = item.as_ref().map(|t| t.id.clone());
    let title = if item_id.is_some() { "Rename document type" } else { "New document type" };

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
                Some(id) => client.update::<DocumentTypes>(id, &payload).await,
                None => client.create::<DocumentTypes>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    app.success("Document type saved");
                    on_saved.call(());
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                FormField {
                    label: "Name",
                    html_for: "document-type-name",
                    required: true,
                    error: field_error(errors, "name"),
                    Input {
                        id: "document-type-name",
                        value: form.read().name.clone(),
                        oninput: move |v| form.write().name = v,
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
