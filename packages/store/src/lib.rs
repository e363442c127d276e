//! # Client-side state for the admin dashboard
//!
//! Plain Rust state machines the Dioxus views wrap in signals. Nothing here
//! touches the DOM, so every transition is unit-tested natively.
//!
//! | Module | Owns |
//! |--------|------|
//! | [`session`] | [`CurrentUser`] and [`AuthStatus`], the two app-wide containers |
//! | [`notify`] | [`Notifications`] and the error router ([`report`]) |
//! | [`sequence`] | [`Sequencer`] tickets that let the newest request win |
//! | [`debounce`] | [`Debouncer`] for free-text search |
//! | [`load`] | [`Load`], the settle-once state of a detail or edit fetch |
//! | [`list`] | [`ListController`], paginated/filtered/searchable collections |
//! | [`address`] | [`AddressSelector`] and [`AddressPair`], the cascading region picker |
//! | [`guard`] | Route access decisions |
//! | [`forms`] | Validated form models for every create/update screen |

pub mod address;
pub mod debounce;
pub mod forms;
pub mod guard;
pub mod list;
pub mod load;
pub mod notify;
pub mod sequence;
pub mod session;

mod timer;
pub use timer::sleep;

pub use address::{AddressPair, AddressSelector, LevelFetch, LevelState, RegionOption, Side};
pub use debounce::Debouncer;
pub use forms::FieldErrors;
pub use guard::{guard, Access, DASHBOARD_PATH, LOGIN_PATH};
pub use list::{ListController, ListFetch, PageNav};
pub use load::Load;
pub use notify::{report, route_error, ErrorRoute, Level, Notification, Notifications};
pub use sequence::{Completion, Sequencer, Ticket};
pub use session::{AuthStatus, CurrentUser};
