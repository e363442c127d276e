//! Create / edit page for a user, including the child and guardian addresses.

use api::models::{Address, BedRoom, Gender, Role};
use api::{BedRooms, Users};
use dioxus::prelude::*;
use store::forms::UserForm;
use store::{AddressPair, FieldErrors, Load, Side};

use crate::app::{use_app, AppContext};
use crate::components::{
    spawn_region_fetch, AddressFields, Button, ButtonVariant, Checkbox, FormField, Input, Select,
    SelectOption,
};
use crate::Navbar;

use super::{field_error, load_status, VIEWS_CSS};

fn bedroom_options(rooms: &[BedRoom]) -> Vec<SelectOption> {
    rooms
        .iter()
        .map(|r| SelectOption::new(r.id.clone(), format!("{} ({} free)", r.name, r.available())))
        .collect()
}

fn gender_options() -> Vec<SelectOption> {
    [Gender::Male, Gender::Female]
        .into_iter()
        .map(|g| SelectOption::new(g.as_str(), g.label()))
        .collect()
}

/// Restore both addresses of an existing user into the pair.
fn prefill_addresses(app: AppContext, mut pair: Signal<AddressPair>, child: Option<Address>, guardian: Option<Address>) {
    let same = child.is_some() && child == guardian;
    let mut fetches = Vec::new();
    {
        let mut pair = pair.write();
        if same {
            pair.set_mirror(true);
        }
        if let Some(address) = &child {
            fetches.extend(pair.prefill(Side::Primary, address).into_iter().map(|f| (Side::Primary, f)));
        }
        if let (Some(address), false) = (&guardian, same) {
            fetches.extend(pair.prefill(Side::Secondary, address).into_iter().map(|f| (Side::Secondary, f)));
        }
    }
    for (side, fetch) in fetches {
        spawn_region_fetch(app, pair, side, fetch);
    }
}

#[component]
pub fn UserFormView(
    /// `None` to create a new user.
    user_id: Option<String>,
    on_saved: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let app = use_app();
    let is_new = user_id.is_none();
    let mut form = use_signal(UserForm::new);
    let mut pair = use_signal(AddressPair::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut load = use_signal(move || Load::for_form(!is_new));
    let mut roles = use_signal(Vec::<Role>::new);
    let mut bedrooms = use_signal(Vec::<BedRoom>::new);

    // Lookups and, when editing, the user itself
    let edit_id = user_id.clone();
    use_hook(move || {
        let fetches = pair.write().load_provinces();
        for (side, fetch) in fetches {
            spawn_region_fetch(app, pair, side, fetch);
        }
        spawn(async move {
            let client = app.client();
            match client.roles().await {
                Ok(items) => roles.set(items),
                Err(e) => app.report(&e),
            }
            match client.list_all::<BedRooms>().await {
                Ok(items) => bedrooms.set(items),
                Err(e) => app.report(&e),
            }
            let Some(id) = edit_id else { return };
            let result = client.fetch::<Users>(&id).await;
            match &result {
                Ok(user) => {
                    form.set(UserForm::from_user(user));
                    let profile = user.profile.clone().unwrap_or_default();
                    let guardian_address = profile.guardian.and_then(|g| g.address);
                    prefill_addresses(app, pair, profile.address, guardian_address);
                }
                Err(e) => app.report(e),
            }
            load.set(Load::from_result(result.map(|_| ())));
        });
    });

    let submit_id = user_id.clone();
    let handle_submit = move |evt: FormEvent| {
        let user_id = submit_id.clone();
        async move {
            evt.prevent_default();
            let current = form();
            let (child, guardian) = pair.read().addresses(&current.street, &current.guardian_street);
            let payload = match current.to_payload(user_id.is_none(), &child, &guardian) {
                Ok(payload) => payload,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(FieldErrors::new());
            saving.set(true);

            let client = app.client();
            let result = match &user_id {
                Some(id) => client.update::<Users>(id, &payload).await,
                None => client.create::<Users>(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(user) => {
                    app.success(if user_id.is_some() { "User updated" } else { "User created" });
                    on_saved.call(user.id);
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
        }
    };

    let toggle_mirror = move |on: bool| {
        let fetches = pair.write().set_mirror(on);
        for fetch in fetches {
            spawn_region_fetch(app, pair, Side::Secondary, fetch);
        }
    };

    if let Some(status) = load_status(&load.read(), "Unable to load this user") {
        return status;
    }

    let current = form.read().clone();
    let role_list = roles.read().clone();
    let mirrored = pair.read().is_mirrored();
    let guardian_street = if mirrored {
        current.street.clone()
    } else {
        current.guardian_street.clone()
    };
    let title = if is_new { "New user" } else { "Edit user" };
    let password_label = if is_new {
        "Password"
    } else {
        "New password (leave blank to keep)"
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar { title: "{title}" }

        form {
            class: "form-page",
            onsubmit: handle_submit,

            section {
                class: "form-section",
                h2 { "Account" }
                div {
                    class: "form-grid",
                    FormField {
                        label: "Email",
                        html_for: "user-email",
                        required: true,
                        error: field_error(errors, "email"),
                        Input {
                            id: "user-email",
                            r#type: "email",
                            value: current.email.clone(),
                            oninput: move |v| form.write().email = v,
                        }
                    }
                    FormField {
                        label: "Username",
                        html_for: "user-username",
                        required: true,
                        error: field_error(errors, "username"),
                        Input {
                            id: "user-username",
                            value: current.username.clone(),
                            oninput: move |v| form.write().username = v,
                        }
                    }
                    FormField {
                        label: "{password_label}",
                        html_for: "user-password",
                        required: is_new,
                        error: field_error(errors, "password"),
                        Input {
                            id: "user-password",
                            r#type: "password",
                            value: current.password.clone(),
                            oninput: move |v| form.write().password = v,
                        }
                    }
                    FormField {
                        label: "Roles",
                        html_for: "user-roles",
                        required: true,
                        error: field_error(errors, "role_ids"),
                        div {
                            id: "user-roles",
                            class: "checkbox-group",
                            for role in role_list {
                                Checkbox {
                                    key: "{role.id}",
                                    id: "role-{role.id}",
                                    checked: current.role_ids.contains(&role.id),
                                    onchange: {
                                        let id = role.id.clone();
                                        move |on: bool| {
                                            let mut form = form.write();
                                            form.role_ids.retain(|r| r != &id);
                                            if on {
                                                form.role_ids.push(id.clone());
                                            }
                                        }
                                    },
                                    "{role.name}"
                                }
                            }
                        }
                    }
                    Checkbox {
                        id: "user-active",
                        checked: current.is_active,
                        onchange: move |on| form.write().is_active = on,
                        "Account active"
                    }
                }
            }

            section {
                class: "form-section",
                h2 { "Profile" }
                div {
                    class: "form-grid",
                    FormField {
                        label: "Full name",
                        html_for: "user-full-name",
                        required: true,
                        error: field_error(errors, "full_name"),
                        Input {
                            id: "user-full-name",
                            value: current.full_name.clone(),
                            oninput: move |v| form.write().full_name = v,
                        }
                    }
                    FormField {
                        label: "Nickname",
                        html_for: "user-nickname",
                        error: field_error(errors, "nickname"),
                        Input {
                            id: "user-nickname",
                            value: current.nickname.clone(),
                            oninput: move |v| form.write().nickname = v,
                        }
                    }
                    FormField {
                        label: "Gender",
                        html_for: "user-gender",
                        error: field_error(errors, "gender"),
                        Select {
                            id: "user-gender",
                            value: current.gender.clone(),
                            options: gender_options(),
                            onchange: move |v| form.write().gender = v,
                        }
                    }
                    FormField {
                        label: "Birth place",
                        html_for: "user-birth-place",
                        error: field_error(errors, "birth_place"),
                        Input {
                            id: "user-birth-place",
                            value: current.birth_place.clone(),
                            oninput: move |v| form.write().birth_place = v,
                        }
                    }
                    FormField {
                        label: "Birth date",
                        html_for: "user-birth-date",
                        error: field_error(errors, "birth_date"),
                        Input {
                            id: "user-birth-date",
                            r#type: "date",
                            value: current.birth_date.clone(),
                            oninput: move |v| form.write().birth_date = v,
                        }
                    }
                    FormField {
                        label: "Religion",
                        html_for: "user-religion",
                        error: field_error(errors, "religion"),
                        Input {
                            id: "user-religion",
                            value: current.religion.clone(),
                            oninput: move |v| form.write().religion = v,
                        }
                    }
                    FormField {
                        label: "Phone",
                        html_for: "user-phone",
                        error: field_error(errors, "phone"),
                        Input {
                            id: "user-phone",
                            r#type: "tel",
                            value: current.phone.clone(),
                            oninput: move |v| form.write().phone = v,
                        }
                    }
                    FormField {
                        label: "Entry date",
                        html_for: "user-entry-date",
                        error: field_error(errors, "entry_date"),
                        Input {
                            id: "user-entry-date",
                            r#type: "date",
                            value: current.entry_date.clone(),
                            oninput: move |v| form.write().entry_date = v,
                        }
                    }
                    FormField {
                        label: "Bedroom",
                        html_for: "user-bedroom",
                        error: field_error(errors, "bed_room_id"),
                        Select {
                            id: "user-bedroom",
                            value: current.bed_room_id.clone(),
                            options: bedroom_options(&bedrooms.read()),
                            placeholder: "No bedroom",
                            onchange: move |v| form.write().bed_room_id = v,
                        }
                    }
                }
                h3 { "Address" }
                AddressFields {
                    pair,
                    side: Side::Primary,
                    id_prefix: "child-address",
                    street: current.street.clone(),
                    on_street: move |v| form.write().street = v,
                }
            }

            section {
                class: "form-section",
                h2 { "Guardian" }
                div {
                    class: "form-grid",
                    FormField {
                        label: "Name",
                        html_for: "guardian-name",
                        error: field_error(errors, "guardian_name"),
                        Input {
                            id: "guardian-name",
                            value: current.guardian_name.clone(),
                            oninput: move |v| form.write().guardian_name = v,
                        }
                    }
                    FormField {
                        label: "Relationship",
                        html_for: "guardian-relationship",
                        error: field_error(errors, "guardian_relationship"),
                        Input {
                            id: "guardian-relationship",
                            value: current.guardian_relationship.clone(),
                            oninput: move |v| form.write().guardian_relationship = v,
                        }
                    }
                    FormField {
                        label: "Phone",
                        html_for: "guardian-phone",
                        error: field_error(errors, "guardian_phone"),
                        Input {
                            id: "guardian-phone",
                            r#type: "tel",
                            value: current.guardian_phone.clone(),
                            oninput: move |v| form.write().guardian_phone = v,
                        }
                    }
                    FormField {
                        label: "Occupation",
                        html_for: "guardian-occupation",
                        error: field_error(errors, "guardian_occupation"),
                        Input {
                            id: "guardian-occupation",
                            value: current.guardian_occupation.clone(),
                            oninput: move |v| form.write().guardian_occupation = v,
                        }
                    }
                }
                h3 { "Address" }
                Checkbox {
                    id: "guardian-same-address",
                    checked: mirrored,
                    onchange: toggle_mirror,
                    "Same as child address"
                }
                AddressFields {
                    pair,
                    side: Side::Secondary,
                    id_prefix: "guardian-address",
                    street: guardian_street,
                    on_street: move |v| form.write().guardian_street = v,
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
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
