//! Small building blocks shared by every screen.

mod address_fields;
mod button;
mod feedback;
mod form;
mod pagination;

pub use address_fields::{spawn_region_fetch, AddressFields};
pub use button::{Button, ButtonVariant};
pub use feedback::{ConfirmDialog, EmptyState, Spinner, ToastHost, UnauthorizedModal};
pub use form::{
    Checkbox, FieldError, FormField, Input, Label, SearchBox, Select, SelectOption, TextArea,
};
pub use pagination::Pagination;
