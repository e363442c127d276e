//! # Entity models mirrored from the admin REST API
//!
//! Every type here is a plain record owned by the remote service. The client
//! only holds transient, render-only copies, so there are no invariants beyond
//! optional-field shapes. Field names follow the API's camelCase JSON.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`User`], [`Credentials`], [`Role`], [`Profile`], [`Guardian`], [`Gender`] |
//! | [`address`] | [`Address`], [`Region`], [`RegionLevel`] |
//! | [`bedroom`] | [`BedRoom`] |
//! | [`donation`] | [`Donation`] |
//! | [`event`] | [`Event`], [`EventStatus`] |
//! | [`document`] | [`Document`] |
//! | [`inventory`] | [`Inventory`] |
//! | [`lookup`] | [`TypeRef`], the "type" lookup entity shared by most records |
//! | [`page`] | [`Page`] and [`PageMeta`], the `{ data, meta }` list envelope |
//! | [`dashboard`] | [`DashboardSummary`] |

pub mod address;
pub mod bedroom;
pub mod dashboard;
pub mod document;
pub mod donation;
pub mod event;
pub mod inventory;
pub mod lookup;
pub mod page;
pub mod user;

pub use address::{Address, Region, RegionLevel};
pub use bedroom::{BedRoom, BedRoomPayload};
pub use dashboard::DashboardSummary;
pub use document::{Document, DocumentPayload};
pub use donation::{format_rupiah, Donation, DonationPayload};
pub use event::{Event, EventPayload, EventStatus};
pub use inventory::{Inventory, InventoryPayload};
pub use lookup::{TypeRef, TypePayload};
pub use page::{Page, PageMeta};
pub use user::{
    AddressPayload, Credentials, CredentialsPayload, Gender, Guardian, GuardianPayload, Profile,
    ProfilePayload, Role, User, UserPayload,
};
