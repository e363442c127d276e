use api::models::Donation;
use api::{Donations, LookupKind};
use dioxus::prelude::*;
use store::forms::{format_date, DonationForm};
use store::{FieldErrors, Load};

use crate::app::use_app;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, FormField, Input, SearchBox, Select, TextArea,
};
use crate::hooks::{use_list, use_lookup};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::{field_error, list_status, load_status, pagination_for, type_options, VIEWS_CSS};

#[component]
pub fn DonationListView(on_create: EventHandler<()>, on_edit: EventHandler<String>) -> Element {
    let handle = use_list::<Donations>();
    let types = use_lookup(LookupKind::DonationType);
    let mut pending_delete = use_signal(|| Option::<Donation>::None);

    let list = handle.list.read();
    let donation_type = list.filter("donationTypeId").unwrap_or_default().to_string();
    let donations = list.items().to_vec();
    drop(list);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar {
            title: "Donations",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_create.call(()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Record donation"
            }
        }

        div {
            class: "toolbar",
            SearchBox {
                value: handle.search.read().clone(),
                placeholder: "Search donor",
                oninput: move |text| handle.type_search(text),
            }
            Select {
                id: "donation-type-filter",
                value: donation_type,
                options: type_options(&types.read()),
                placeholder: "All types",
                onchange: move |v| handle.set_filter("donationTypeId", v),
            }
        }

        if let Some(status) = list_status(handle, "No donations recorded") {
            {status}
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Donor" }
                        th { "Type" }
                        th { "Date" }
                        th { class: "numeric", "Amount" }
                        th { class: "actions", "" }
                    }
                }
                tbody {
                    for donation in donations {
                        tr {
                            key: "{donation.id}",
                            td { "{donation.donor_name}" }
                            td { {donation.donation_type.as_ref().map(|t| t.name.clone()).unwrap_or_default()} }
                            td { {format_date(donation.date)} }
                            td { class: "numeric", "{donation.formatted_amount()}" }
                            td {
                                class: "actions",
                                button {
                                    class: "btn btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let id = donation.id.clone();
                                        move |_| on_edit.call(id.clone())
                                    },
                                    Icon { icon: FaPen, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete",
                                    onclick: {
                                        let donation = donation.clone();
                                        move |_| pending_delete.set(Some(donation.clone()))
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

        if let Some(donation) = pending_delete() {
            ConfirmDialog {
                title: "Delete donation",
                message: format!("Delete the donation from {}?", donation.donor_name),
                on_confirm: move |_| {
                    handle.remove(donation.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
pub fn DonationFormView(donation_id: Option<String>, on_done: EventHandler<()>) -> Element {
    let app = use_app();
    let types = use_lookup(LookupKind::DonationType);
    let mut form = use_signal(DonationForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut load = use_signal(|| Load::for_form(donation_id.is_some()));
    let is_new = donation_id.is_none();

    let load_id = donation_id.clone();
    use_hook(move || {
        let Some(id) = load_id else { return };
        spawn(async move {
            let result = app.client().fetch::<Donations>(&id).await;
            match &result {
                Ok(donation) => form.set(DonationForm::from_item(donation)),
                Err(e) => app.report(e),
            }
            load.set(Load::from_result(result.map(|_| ())));
        });
    });

    let submit_id = donation_id.clone();
    let handle_submit = move |evt: FormEvent| {
        let donation_id = submit_id.clone();
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
            let result = match &donation_id {
                Some(id) => client.update::<Donations>(id, &payload).await,
                None => client.create::<Donations>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    app.success("Donation saved");
                    on_done.call(());
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
        }
    };

    if let Some(status) = load_status(&load.read(), "Unable to load this donation") {
        return status;
    }

    let current = form.read().clone();
    let title = if is_new { "Record donation" } else { "Edit donation" };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar { title: "{title}" }

        form {
            class: "form-section",
            onsubmit: handle_submit,
            div {
                class: "form-grid",
                FormField {
                    label: "Donor name",
                    html_for: "donation-donor",
                    required: true,
                    error: field_error(errors, "donor_name"),
                    Input {
                        id: "donation-donor",
                        value: current.donor_name.clone(),
                        oninput: move |v| form.write().donor_name = v,
                    }
                }
                FormField {
                    label: "Donor phone",
                    html_for: "donation-phone",
                    error: field_error(errors, "donor_phone"),
                    Input {
                        id: "donation-phone",
                        r#type: "tel",
                        value: current.donor_phone.clone(),
                        oninput: move |v| form.write().donor_phone = v,
                    }
                }
                FormField {
                    label: "Amount (Rp)",
                    html_for: "donation-amount",
                    required: true,
                    error: field_error(errors, "amount"),
                    Input {
                        id: "donation-amount",
                        placeholder: "1.000.000",
                        value: current.amount.clone(),
                        oninput: move |v| form.write().amount = v,
                    }
                }
                FormField {
                    label: "Date",
                    html_for: "donation-date",
                    required: true,
                    error: field_error(errors, "date"),
                    Input {
                        id: "donation-date",
                        r#type: "date",
                        value: current.date.clone(),
                        oninput: move |v| form.write().date = v,
                    }
                }
                FormField {
                    label: "Type",
                    html_for: "donation-type",
                    required: true,
                    error: field_error(errors, "donation_type_id"),
                    Select {
                        id: "donation-type",
                        value: current.donation_type_id.clone(),
                        options: type_options(&types.read()),
                        onchange: move |v| form.write().donation_type_id = v,
                    }
                }
                FormField {
                    label: "Description",
                    html_for: "donation-description",
                    error: field_error(errors, "description"),
                    TextArea {
                        id: "donation-description",
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
