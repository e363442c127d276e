use crate::auth::TokenStore;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CredentialsPayload, Document, ProfilePayload, User};
use crate::request::ApiRequest;
use crate::transport::Transport;

use super::{Resource, Users};

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    /// Replace the profile of a user (profile tab).
    pub async fn update_profile(
        &self,
        user_id: &str,
        payload: &ProfilePayload,
    ) -> Result<User, ApiError> {
        let path = format!("{}/profile", Users::item_path(user_id));
        self.send(ApiRequest::put(path).with_body(payload)?).await
    }

    /// Replace the credentials of a user (credentials tab).
    pub async fn update_credentials(
        &self,
        user_id: &str,
        payload: &CredentialsPayload,
    ) -> Result<User, ApiError> {
        let path = format!("{}/credentials", Users::item_path(user_id));
        self.send(ApiRequest::put(path).with_body(payload)?).await
    }

    /// Documents on file for a user (documents tab).
    pub async fn user_documents(&self, user_id: &str) -> Result<Vec<Document>, ApiError> {
        let path = format!("{}/documents", Users::item_path(user_id));
        Ok(self.send_page(ApiRequest::get(path)).await?.data)
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
    async fn test_update_credentials_path_and_body() {
        let transport = MockTransport::new();
        transport.respond_json(
            Method::Put,
            "/admin/users/u1/credentials",
            json!({"data": {"id": "u1", "email": "a@b.c", "username": "a", "isActive": false}}),
        );
        let client = ApiClient::new(transport.clone(), MemoryTokenStore::new());
        let payload = CredentialsPayload {
            email: "a@b.c".to_string(),
            username: "a".to_string(),
            password: None,
            is_active: false,
            role_ids: Vec::new(),
        };
        let user = client.update_credentials("u1", &payload).await.unwrap();
        assert!(!user.credentials.is_active);
        assert_eq!(transport.last_request().unwrap().body.unwrap()["isActive"], false);
    }
}
