use api::models::{Event, EventStatus};
use api::{Events, LookupKind};
use dioxus::prelude::*;
use store::forms::{format_date, EventForm};
use store::{FieldErrors, Load};

use crate::app::use_app;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, FormField, Input, SearchBox, Select, SelectOption,
    TextArea,
};
use crate::hooks::{use_list, use_lookup};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::{field_error, list_status, load_status, pagination_for, text_or_dash, type_options, VIEWS_CSS};

fn status_options() -> Vec<SelectOption> {
    EventStatus::ALL
        .into_iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

fn status_badge(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Planned => "badge badge-info",
        EventStatus::Ongoing => "badge badge-success",
        EventStatus::Done => "badge badge-muted",
        EventStatus::Cancelled => "badge badge-danger",
    }
}

#[component]
pub fn EventListView(on_create: EventHandler<()>, on_edit: EventHandler<String>) -> Element {
    let handle = use_list::<Events>();
    let mut pending_delete = use_signal(|| Option::<Event>::None);

    let list = handle.list.read();
    let status = list.filter("status").unwrap_or_default().to_string();
    let events = list.items().to_vec();
    drop(list);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar {
            title: "Events",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_create.call(()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add event"
            }
        }

        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search events",
                oninput: move |text| handle.type_search(text),
            }
            Select {
                id: "event-status-filter",
                value: status,
                options: status_options(),
                placeholder: "Any status",
                onchange: move |v| handle.set_filter("status", v),
            }
        }

        if let Some(status) = list_status(handle, "No events scheduled") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Location" }
                        th { "Dates" }
                        th { "Status" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for event in events {
                        tr {
                            key: "{event.id}",
                            td { "{event.name}" }
                            td { {event.event_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()} }
                            td { {text_or_dash(&event.location)} }
                            td { "{format_date(event.start_date)} to {format_date(event.end_date)}" }
                            td {
                                span { class: status_badge(event.status), "{event.status.label()}" }
                            }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let id = event.id.clone();
                                        move |_| on_edit.call(id.clone())
                                    },
                                    Icon { icon: FaPen, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete",
                                    onclick: {
                                        let event = event.clone();
                                        move |_| pending_delete.set(Some(event.clone()))
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

        if let Some(event) = pending_delete() {
            ConfirmDialog {
                title: "Delete event",
                message: format!("Delete {}?", event.name),
                on_confirm: move |_| {
                    handle.remove(event.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
pub fn EventFormView(event_id: Option<String>, on_done: EventHandler<()>) -> Element {
    let app = use_app();
    let types = use_lookup(LookupKind::EventType);
    let mut form = use_signal(EventForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut load = use_signal(|| Load::for_form(event_id.is_some()));
    let is_new = event_id.is_none();

    let load_id = event_id.clone();
    use_hook(move || {
        let Some(id) = load_id else { return };
        spawn(async move {
            let result = app.client().fetch::<Events>(&id).await;
            match &result {
                Ok(event) => form.set(EventForm::from_item(event)),
                Err(e) => app.report(e),
            }
            load.set(Load::from_result(result.map(|_| ())));
        });
    });

    let submit_id = event_id.clone();
    let handle_submit = move |evt: FormEvent| {
        let event_id = submit_id.clone();
        async move {
            evt.prevent_default();
            let payload = match form.read().to_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(FieldErrors::new());
            saving.set(true);
            let client = app.client();
            let result = match &event_id {
                Some(id) => client.update::<Events>(id, &payload).await,
                None => client.create::<Events>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    app.success("Event saved");
                    on_done.call(());
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
        }
    };

    if let Some(status) = load_status(&load.read(), "Unable to load this event") {
        return status;
    }

    let current = form.read().clone();
    let title = if is_new { "New event" } else { "Edit event" };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar { title: "{title}" }

        form {
            class: "form-section",
            onsubmit: handle_submit,
            div {
                class: "form-grid",
                FormField {
                    label: "Name",
                    html_for: "event-name",
                    required: true,
                    error: field_error(errors, "name"),
                    Input {
                        id: "event-name",
                        value: current.name.clone(),
                        oninput: move |v| form.write().name = v,
                    }
                }
                FormField {
                    label: "Type",
                    html_for: "event-type",
                    required: true,
                    error: field_error(errors, "event_type_id"),
                    Select {
                        id: "event-type",
                        value: current.event_type_id.clone(),
                        options: type_options(&types.read()),
                        onchange: move |v| form.write().event_type_id = v,
                    }
                }
                FormField {
                    label: "Location",
                    html_for: "event-location",
                    error: field_error(errors, "location"),
                    Input {
                        id: "event-location",
                        value: current.location.clone(),
                        oninput: move |v| form.write().location = v,
                    }
                }
                FormField {
                    label: "Status",
                    html_for: "event-status",
                    required: true,
                    error: field_error(errors, "status"),
                    Select {
                        id: "event-status",
                        value: current.status.clone(),
                        options: status_options(),
                        onchange: move |v| form.write().status = v,
                    }
                }
                FormField {
                    label: "Start date",
                    html_for: "event-start",
                    required: true,
                    error: field_error(errors, "start_date"),
                    Input {
                        id: "event-start",
                        r#type: "date",
                        value: current.start_date.clone(),
                        oninput: move |v| form.write().start_date = v,
                    }
                }
                FormField {
                    label: "End date",
                    html_for: "event-end",
                    required: true,
                    error: field_error(errors, "end_date"),
                    Input {
                        id: "event-end",
                        r#type: "date",
                        value: current.end_date.clone(),
                        oninput: move |v| form.write().end_date = v,
                    }
                }
                FormField {
                    label: "Description",
                    html_for: "event-description",
                    error: field_error(errors, "description"),
                    TextArea {
                        id: "event-description",
                        value: current.description.clone(),
                        oninput: move |v| form.write().description = v,
                    }
                }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_done.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    loading: saving(),
                    "Save"
                }
            }
        }
    }
}
