//! # API crate: typed client for the orphanage admin REST API
//!
//! Everything the dashboard knows about the remote service lives here: the
//! records it mirrors, the single HTTP choke point every call goes through, and
//! the session token that call attaches.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | none | Entity records, write payloads, the `{ data, meta }` page envelope |
//! | [`error`] | none | [`ApiError`], the tagged failure type decided once per response |
//! | [`client`] | none | [`ApiClient`], the request wrapper (bearer token, status classification, envelope unwrapping) |
//! | [`endpoints`] | none | Generic CRUD over [`Resource`]s plus address, lookup, user, session and dashboard calls |
//! | [`auth`] | `web` for the cookie store | [`TokenStore`] and its cookie / in-memory implementations |
//! | [`config`] | none | [`ApiConfig`] from compile-time environment |
//!
//! ## Transports
//!
//! [`Transport`] is the async seam between the client and the network.
//! [`MockTransport`] answers from an in-memory routing table (tests, native
//! builds); `FetchTransport` uses the browser's `fetch` on wasm32 with the `web`
//! feature.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod request;
pub mod transport;

mod mock;
pub use mock::MockTransport;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod fetch;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use fetch::FetchTransport;

pub use auth::{MemoryTokenStore, TokenStore};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use auth::CookieTokenStore;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use endpoints::{
    BedRooms, DocumentTypes, Documents, Donations, Events, Inventories, ListQuery, LookupKind,
    Resource, Users,
};
pub use error::ApiError;
pub use request::{ApiRequest, Method};
pub use transport::{RawResponse, Transport};
