//! User detail page with Profile, Credentials and Documents tabs.

use api::models::{BedRoom, Document, Role, User};
use api::{BedRooms, Documents, Users};
use dioxus::prelude::*;
use store::forms::{format_date, UserForm};
use store::{FieldErrors, Load};

use crate::app::use_app;
use crate::components::{
    Button, ButtonVariant, Checkbox, ConfirmDialog, EmptyState, FormField, Input, Select,
    SelectOption, Spinner,
};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::{Icon, Navbar};

use super::documents::DocumentDialog;
use super::{field_error, load_status, text_or_dash, VIEWS_CSS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Profile,
    Credentials,
    Documents,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Profile, Tab::Credentials, Tab::Documents];

    fn label(self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Credentials => "Credentials",
            Tab::Documents => "Documents",
        }
    }
}

#[component]
pub fn UserDetailView(user_id: String, on_edit: EventHandler<String>, on_deleted: EventHandler<()>) -> Element {
    let app = use_app();
    let mut user = use_signal(|| Load::<User>::Pending);
    let mut tab = use_signal(|| Tab::Profile);
    let mut confirm_delete = use_signal(|| false);

    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| user_id.clone());
    if *id_signal.peek() != user_id {
        id_signal.set(user_id.clone());
    }

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let result = app.client().fetch::<Users>(&id).await;
            if let Err(e) = &result {
                app.report(e);
            }
            user.set(Load::from_result(result));
        }
    });

    let handle_delete = move |_| {
        let id = id_signal();
        spawn(async move {
            match app.client().remove::<Users>(&id).await {
                Ok(()) => {
                    app.success("User deleted");
                    on_deleted.call(());
                }
                Err(e) => app.report(&e),
            }
        });
    };

    let current = match user() {
        Load::Ready(found) => found,
        other => return load_status(&other, "Unable to load this user").unwrap_or_else(|| rsx! {}),
    };
    let name = current.display_name().to_string();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        Navbar {
            title: "{name}",
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_edit.call(id_signal()),
                Icon { icon: FaPen, width: 12, height: 12 }
                " Edit"
            }
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| confirm_delete.set(true),
                Icon { icon: FaTrash, width: 12, height: 12 }
                " Delete"
            }
        }

        div {
            class: "tabs",
            for t in Tab::ALL {
                button {
                    key: "{t.label()}",
                    class: if tab() == t { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(t),
                    "{t.label()}"
                }
            }
        }

        {match tab() {
            Tab::Profile => rsx! {
                ProfileTab { user: current.clone(), on_updated: move |u| user.set(Load::Ready(u)) }
            },
            Tab::Credentials => rsx! {
                CredentialsTab { user: current.clone(), on_updated: move |u| user.set(Load::Ready(u)) }
            },
            Tab::Documents => rsx! {
                DocumentsTab { user_id: current.id.clone() }
            },
        }}

        if confirm_delete() {
            ConfirmDialog {
                title: "Delete user",
                message: format!("Delete {name}? This cannot be undone."),
                on_confirm: handle_delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}

#[component]
fn ProfileTab(user: User, on_updated: EventHandler<User>) -> Element {
    let app = use_app();
    let mut bedrooms = use_signal(Vec::<BedRoom>::new);
    let mut assigning = use_signal(|| false);
    let profile = user.profile.clone().unwrap_or_default();
    let mut bed_room_id = use_signal(|| profile.bed_room.as_ref().map(|b| b.id.clone()).unwrap_or_default());

    use_hook(move || {
        spawn(async move {
            match app.client().list_all::<BedRooms>().await {
                Ok(items) => bedrooms.set(items),
                Err(e) => app.report(&e),
            }
        })
    });

    let assign_user = user.clone();
    let handle_assign = move |_| {
        let user = assign_user.clone();
        spawn(async move {
            let profile = user.profile.clone().unwrap_or_default();
            let address = profile.address.clone().unwrap_or_default();
            let guardian_address = profile
                .guardian
                .as_ref()
                .and_then(|g| g.address.clone())
                .unwrap_or_default();
            let mut form = UserForm::from_user(&user);
            form.bed_room_id = bed_room_id();
            let payload = match form.to_profile(&address, &guardian_address) {
                Ok(payload) => payload,
                Err(e) => {
                    let mut notifications = app.notifications;
                    let first = e.get("full_name").unwrap_or("Profile is incomplete").to_string();
                    notifications.write().error(first);
                    return;
                }
            };
            assigning.set(true);
            match app.client().update_profile(&user.id, &payload).await {
                Ok(updated) => {
                    app.success("Bedroom updated");
                    on_updated.call(updated);
                }
                Err(e) => app.report(&e),
            }
            assigning.set(false);
        });
    };

    let options: Vec<SelectOption> = bedrooms
        .read()
        .iter()
        .map(|r| SelectOption::new(r.id.clone(), format!("{} ({} free)", r.name, r.available())))
        .collect();
    let guardian = profile.guardian.clone().unwrap_or_default();
    let rows = [
        ("Full name", profile.full_name.clone()),
        ("Nickname", text_or_dash(&profile.nickname)),
        ("Gender", profile.gender.label().to_string()),
        ("Birth place", text_or_dash(&profile.birth_place)),
        ("Birth date", format_date(profile.birth_date)),
        ("Religion", text_or_dash(&profile.religion)),
        ("Phone", text_or_dash(&profile.phone)),
        ("Entry date", format_date(profile.entry_date)),
        ("Address", profile.address.as_ref().map(|a| a.summary()).unwrap_or_default()),
        ("Guardian", guardian.name.clone()),
        ("Relationship", guardian.relationship.clone()),
        ("Guardian phone", text_or_dash(&guardian.phone)),
        ("Guardian address", guardian.address.as_ref().map(|a| a.summary()).unwrap_or_default()),
    ];

    rsx! {
        dl {
            class: "detail-list",
            for (label, value) in rows {
                div {
                    key: "{label}",
                    dt { "{label}" }
                    dd { if value.is_empty() { "-" } else { "{value}" } }
                }
            }
        }
        div {
            class: "inline-form",
            FormField {
                label: "Bedroom",
                html_for: "profile-bedroom",
                error: None,
                Select {
                    id: "profile-bedroom",
                    value: bed_room_id(),
                    options,
                    placeholder: "No bedroom",
                    onchange: move |v| bed_room_id.set(v),
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                loading: assigning(),
                onclick: handle_assign,
                "Assign"
            }
        }
    }
}

#[component]
fn CredentialsTab(user: User, on_updated: EventHandler<User>) -> Element {
    let app = use_app();
    let mut form = use_signal(|| UserForm::from_user(&user));
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut roles = use_signal(Vec::<Role>::new);
    let user_id = user.id.clone();

    use_hook(move || {
        spawn(async move {
            match app.client().roles().await {
                Ok(items) => roles.set(items),
                Err(e) => app.report(&e),
            }
        })
    });

    let handle_submit = move |evt: FormEvent| {
        let user_id = user_id.clone();
        async move {
            evt.prevent_default();
            let payload = match form.read().to_credentials() {
                Ok(payload) => payload,
                Err(e) => {
                    errors.set(e);
                    return;
                }
            };
            errors.set(FieldErrors::new());
            saving.set(true);
            match app.client().update_credentials(&user_id, &payload).await {
                Ok(updated) => {
                    form.write().password.clear();
                    app.success("Credentials updated");
                    on_updated.call(updated);
                }
                Err(e) => {
                    errors.set(FieldErrors::from_api(&e));
                    app.report(&e);
                }
            }
            saving.set(false);
        }
    };

    let current = form.read().clone();

    rsx! {
        form {
            class: "form-section",
            onsubmit: handle_submit,
            div {
                class: "form-grid",
                FormField {
                    label: "Email",
                    html_for: "cred-email",
                    error: field_error(errors, "email"),
                    Input {
                        id: "cred-email",
                        r#type: "email",
                        value: current.email.clone(),
                        oninput: move |v| form.write().email = v,
                    }
                }
                FormField {
                    label: "Username",
                    html_for: "cred-username",
                    error: field_error(errors, "username"),
                    Input {
                        id: "cred-username",
                        value: current.username.clone(),
                        oninput: move |v| form.write().username = v,
                    }
                }
                FormField {
                    label: "New password",
                    html_for: "cred-password",
                    error: field_error(errors, "password"),
                    Input {
                        id: "cred-password",
                        r#type: "password",
                        placeholder: "Leave blank to keep",
                        value: current.password.clone(),
                        oninput: move |v| form.write().password = v,
                    }
                }
                FormField {
                    label: "Roles",
                    html_for: "cred-roles",
                    error: field_error(errors, "role_ids"),
                    div {
                        id: "cred-roles",
                        class: "checkbox-group",
                        for role in roles.read().clone() {
                            Checkbox {
                                key: "{role.id}",
                                id: "cred-role-{role.id}",
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
                    id: "cred-active",
                    checked: current.is_active,
                    onchange: move |on| form.write().is_active = on,
                    "Account active"
                }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    loading: saving(),
                    "Save credentials"
                }
            }
        }
    }
}

#[component]
fn DocumentsTab(user_id: String) -> Element {
    let app = use_app();
    let mut documents = use_signal(|| Load::<Vec<Document>>::Pending);
    let mut adding = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Document>::None);

    let load_id = user_id.clone();
    let mut reload = use_resource(move || {
        let id = load_id.clone();
        async move {
            match app.client().user_documents(&id).await {
                Ok(items) => documents.set(Load::Ready(items)),
                Err(e) => {
                    app.report(&e);
                    // A failed reload keeps the rows already on screen
                    if documents.peek().is_pending() {
                        documents.set(Load::Failed(e));
                    }
                }
            }
        }
    });

    let handle_delete = move |id: String| {
        spawn(async move {
            match app.client().remove::<Documents>(&id).await {
                Ok(()) => {
                    app.success("Document deleted");
                    reload.restart();
                }
                Err(e) => app.report(&e),
            }
        });
    };

    rsx! {
        div {
            class: "toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| adding.set(true),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add document"
            }
        }

        {match documents() {
            Load::Pending => rsx! { Spinner {} },
            Load::Failed(err) => rsx! {
                EmptyState { title: "Unable to load documents", hint: err.user_message() }
            },
            Load::Ready(items) if items.is_empty() => rsx! { EmptyState { title: "No documents on file" } },
            Load::Ready(items) => rsx! {
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
                        for doc in items {
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
            },
        }}

        if adding() {
            DocumentDialog {
                document: None,
                user_id: user_id.clone(),
                on_saved: move |_| {
                    adding.set(false);
                    reload.restart();
                },
                on_close: move |_| adding.set(false),
            }
        }

        if let Some(doc) = pending_delete() {
            ConfirmDialog {
                title: "Delete document",
                message: format!("Delete {}?", doc.name),
                on_confirm: move |_| {
                    handle_delete(doc.id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
