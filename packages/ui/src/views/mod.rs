//! Screens shared by the platform packages.
//!
//! Views own their data loading and state; navigation is left to the caller
//! through `EventHandler` props so the router stays in the platform crate.

use dioxus::prelude::*;
use store::FieldErrors;

use crate::components::SelectOption;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod layout;
pub use layout::AdminLayoutView;

mod login;
pub use login::LoginView;

mod password;
pub use password::{ForgotPasswordView, ResetPasswordView};

mod dashboard;
pub use dashboard::DashboardView;

mod users;
pub use users::UserListView;

mod user_form;
pub use user_form::UserFormView;

mod user_detail;
pub use user_detail::UserDetailView;

mod bedrooms;
pub use bedrooms::BedRoomListView;

mod donations;
pub use donations::{DonationFormView, DonationListView};

mod events;
pub use events::{EventFormView, EventListView};

mod documents;
pub use documents::DocumentListView;

mod inventory;
pub use inventory::InventoryListView;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Inline error for `field`, if any.
fn field_error(errors: Signal<FieldErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(str::to_string)
}

fn type_options(items: &[api::models::TypeRef]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|t| SelectOption::new(t.id.clone(), t.name.clone()))
        .collect()
}

fn text_or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Pagination controls bound to a list handle.
fn pagination_for<R: api::Resource>(handle: crate::ListHandle<R>) -> Element {
    let list = handle.list.read();
    rsx! {
        crate::components::Pagination {
            range_label: list.range_label(),
            can_prev: list.can_prev(),
            can_next: list.can_next(),
            per_page: list.query().per_page,
            on_navigate: move |nav| handle.go_to(nav),
            on_per_page: move |size| handle.set_per_page(size),
        }
    }
}

/// Spinner before the first page arrives, empty state for zero records.
fn list_status<R: api::Resource>(handle: crate::ListHandle<R>, empty_title: &str) -> Option<Element> {
    let list = handle.list.read();
    if list.is_empty_state() {
        let title = empty_title.to_string();
        return Some(rsx! { crate::components::EmptyState { title } });
    }
    if list.is_loading() && list.items().is_empty() {
        return Some(rsx! { crate::components::Spinner {} });
    }
    None
}

/// Spinner while a record loads, an error panel once the load has failed.
fn load_status<T>(load: &store::Load<T>, failed_title: &str) -> Option<Element> {
    match load {
        store::Load::Pending => Some(rsx! { crate::components::Spinner {} }),
        store::Load::Failed(err) => {
            let title = failed_title.to_string();
            let hint = err.user_message();
            Some(rsx! { crate::components::EmptyState { title, hint } })
        }
        store::Load::Ready(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::TypeRef;

    #[test]
    fn test_text_or_dash() {
        assert_eq!(text_or_dash(&None), "-");
        assert_eq!(text_or_dash(&Some(String::new())), "-");
        assert_eq!(text_or_dash(&Some("Kamar A".to_string())), "Kamar A");
    }

    #[test]
    fn test_type_options_keep_order() {
        let types = vec![
            TypeRef {
                id: "2".to_string(),
                name: "Uang".to_string(),
            },
            TypeRef {
                id: "1".to_string(),
                name: "Barang".to_string(),
            },
        ];
        let options = type_options(&types);
        assert_eq!(options[0], SelectOption::new("2", "Uang"));
        assert_eq!(options[1].label, "Barang");
    }
}
