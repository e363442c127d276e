use crate::auth::TokenStore;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Role, TypeRef};
use crate::request::ApiRequest;
use crate::transport::Transport;

/// "Type" lookup collections referenced by the records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKind {
    DocumentType,
    DonationType,
    EventType,
    InventoryType,
    BedRoomType,
}

impl LookupKind {
    pub fn path(self) -> &'static str {
        match self {
            LookupKind::DocumentType => "/admin/document-types",
            LookupKind::DonationType => "/admin/donation-types",
            LookupKind::EventType => "/admin/event-types",
            LookupKind::InventoryType => "/admin/inventory-types",
            LookupKind::BedRoomType => "/admin/bedroom-types",
        }
    }
}

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    /// All entries of a lookup collection.
    pub async fn lookups(&self, kind: LookupKind) -> Result<Vec<TypeRef>, ApiError> {
        let page = self
            .send_page(ApiRequest::get(kind.path()).with_query([("perPage", "100")]))
            .await?;
        Ok(page.data)
    }

    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        self.send(ApiRequest::get("/admin/roles")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::mock::MockTransport;
    use crate::request::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_lookups_accept_bare_array() {
        let transport = MockTransport::new();
        transport.respond_json(
            Method::Get,
            "/admin/donation-types",
            json!([{"id": "1", "name": "Uang"}, {"id": "2", "name": "Sembako"}]),
        );
        let client = ApiClient::new(transport, MemoryTokenStore::new());
        let types = client.lookups(LookupKind::DonationType).await.unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[1].name, "Sembako");
    }
}
