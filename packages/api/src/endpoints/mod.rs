//! # Resource endpoints
//!
//! The admin API exposes each collection under a predictable prefix and the same
//! verbs, so CRUD is written once against the [`Resource`] trait:
//!
//! | Call | Request |
//! |------|---------|
//! | [`ApiClient::list`] | `GET {PATH}?page=&perPage=&search=&<filters>` |
//! | [`ApiClient::fetch`] | `GET {PATH}/{id}` |
//! | [`ApiClient::create`] | `POST {PATH}` |
//! | [`ApiClient::update`] | `PUT {PATH}/{id}` |
//! | [`ApiClient::remove`] | `DELETE {PATH}/{id}` |
//!
//! Endpoints that do not fit the pattern live in the submodules: address
//! regions, lookups, user sub-resources, login/session and the dashboard.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::TokenStore;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    BedRoom, BedRoomPayload, Document, DocumentPayload, Donation, DonationPayload, Event,
    EventPayload, Inventory, InventoryPayload, Page, TypePayload, TypeRef, User, UserPayload,
};
use crate::request::ApiRequest;
use crate::transport::Transport;

mod address;
mod dashboard;
mod lookups;
mod session;
mod users;

pub use address::region_path;
pub use lookups::LookupKind;

/// A CRUD collection on the admin API.
pub trait Resource: 'static {
    /// Collection path, e.g. `/admin/users`.
    const PATH: &'static str;
    /// Singular label used in notifications.
    const LABEL: &'static str;
    type Item: DeserializeOwned + Clone + PartialEq + 'static;
    type Payload: Serialize;

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

macro_rules! resource {
    ($name:ident, $path:literal, $label:literal, $item:ty, $payload:ty) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl Resource for $name {
            const PATH: &'static str = $path;
            const LABEL: &'static str = $label;
            type Item = $item;
            type Payload = $payload;
        }
    };
}

resource!(Users, "/admin/users", "User", User, UserPayload);
resource!(BedRooms, "/admin/bedrooms", "Bedroom", BedRoom, BedRoomPayload);
resource!(Donations, "/admin/donations", "Donation", Donation, DonationPayload);
resource!(Events, "/admin/events", "Event", Event, EventPayload);
resource!(Documents, "/admin/documents", "Document", Document, DocumentPayload);
resource!(Inventories, "/admin/inventories", "Inventory item", Inventory, InventoryPayload);
resource!(DocumentTypes, "/admin/document-types", "Document type", TypeRef, TypePayload);

/// Parameters of a paginated, filtered, searchable list request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index.
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    /// Query parameters: `page`, `perPage`, `search` when non-blank, then filters.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("perPage".to_string(), self.per_page.to_string()),
        ];
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search".to_string(), search.to_string()));
        }
        params.extend(
            self.filters
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        params
    }
}

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Page<R::Item>, ApiError> {
        self.send_page(ApiRequest::get(R::PATH).with_query(query.params()))
            .await
    }

    /// Every record of a small collection (first page, server maximum size).
    pub async fn list_all<R: Resource>(&self) -> Result<Vec<R::Item>, ApiError> {
        let query = ListQuery::new(100);
        Ok(self.list::<R>(&query).await?.data)
    }

    pub async fn fetch<R: Resource>(&self, id: &str) -> Result<R::Item, ApiError> {
        self.send(ApiRequest::get(R::item_path(id))).await
    }

    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<R::Item, ApiError> {
        self.send(ApiRequest::post(R::PATH).with_body(payload)?)
            .await
    }

    pub async fn update<R: Resource>(
        &self,
        id: &str,
        payload: &R::Payload,
    ) -> Result<R::Item, ApiError> {
        self.send(ApiRequest::put(R::item_path(id)).with_body(payload)?)
            .await
    }

    pub async fn remove<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(ApiRequest::delete(R::item_path(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::mock::MockTransport;
    use crate::request::Method;
    use serde_json::json;

    fn client() -> (ApiClient<MockTransport, MemoryTokenStore>, MockTransport) {
        let transport = MockTransport::new();
        (ApiClient::new(transport.clone(), MemoryTokenStore::new()), transport)
    }

    #[test]
    fn test_params_skip_blank_search_and_empty_filters() {
        let mut query = ListQuery::new(10);
        query.page = 3;
        query.search = Some("  ".to_string());
        query.filters.insert("status".to_string(), "done".to_string());
        query.filters.insert("type".to_string(), String::new());
        assert_eq!(
            query.params(),
            vec![
                ("page".to_string(), "3".to_string()),
                ("perPage".to_string(), "10".to_string()),
                ("status".to_string(), "done".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_sends_query() {
        let (client, transport) = client();
        transport.respond_json(
            Method::Get,
            "/admin/bedrooms",
            json!({"data": [{"id": "b1", "name": "Melati", "capacity": 6, "occupied": 4}],
                   "meta": {"currentPage": 0, "perPage": 10, "total": 1, "totalPages": 1}}),
        );
        let mut query = ListQuery::new(10);
        query.search = Some("mel".to_string());
        let page = client.list::<BedRooms>(&query).await.unwrap();

        assert_eq!(page.data[0].available(), 2);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_value("search"), Some("mel"));
        assert_eq!(sent.query_value("perPage"), Some("10"));
    }

    #[tokio::test]
    async fn test_create_update_remove_paths() {
        let (client, transport) = client();
        let doc_type = json!({"id": "t1", "name": "Kartu Keluarga"});
        transport
            .respond_json(Method::Post, "/admin/document-types", doc_type.clone())
            .respond_json(Method::Put, "/admin/document-types/t1", doc_type)
            .respond(Method::Delete, "/admin/document-types/t1", 204, "");

        let payload = TypePayload {
            name: "Kartu Keluarga".to_string(),
        };
        let created = client.create::<DocumentTypes>(&payload).await.unwrap();
        client.update::<DocumentTypes>(&created.id, &payload).await.unwrap();
        client.remove::<DocumentTypes>(&created.id).await.unwrap();

        let methods: Vec<Method> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Post, Method::Put, Method::Delete]);
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"name": "Kartu Keluarga"}))
        );
    }
}
