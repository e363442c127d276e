use crate::auth::{LoginRequest, LoginResponse, TokenStore};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::request::ApiRequest;
use crate::transport::Transport;

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    /// Sign in and persist the returned token.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            identifier: identifier.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .send(ApiRequest::post("/auth/login").with_body(&body)?)
            .await?;
        self.tokens().set_token(&response.token);
        tracing::info!("Signed in as {}", body.identifier);
        Ok(response)
    }

    /// The user the stored token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.send(ApiRequest::get("/auth/me")).await
    }

    /// Tell the server to drop the session, then forget the token regardless.
    pub async fn logout(&self) {
        if let Err(e) = self.send_unit(ApiRequest::post("/auth/logout")).await {
            tracing::warn!("Logout request failed: {}", e);
        }
        self.tokens().clear();
    }

    /// Ask the server to mail a password reset link.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email.trim() });
        self.send_unit(ApiRequest::post("/auth/forgot-password").with_body(&body)?)
            .await
    }

    /// Set a new password with the token from the reset link.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "token": token, "password": password });
        self.send_unit(ApiRequest::post("/auth/reset-password").with_body(&body)?)
            .await
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
    async fn test_login_stores_token() {
        let transport = MockTransport::new();
        transport.respond_json(
            Method::Post,
            "/auth/login",
            json!({"data": {"token": "jwt-1", "user": {"id": "u1", "email": "a@b.c", "username": "admin"}}}),
        );
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(transport.clone(), tokens.clone());

        let response = client.login(" admin ", "secret").await.unwrap();
        assert_eq!(response.user.unwrap().credentials.username, "admin");
        assert_eq!(tokens.token().as_deref(), Some("jwt-1"));
        assert_eq!(transport.last_request().unwrap().body.unwrap()["identifier"], "admin");
    }

    #[tokio::test]
    async fn test_failed_login_keeps_token_absent() {
        let transport = MockTransport::new();
        transport.respond(Method::Post, "/auth/login", 400, r#"{"message":"Wrong password"}"#);
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(transport, tokens.clone());

        let err = client.login("admin", "nope").await.unwrap_err();
        assert_eq!(err.user_message(), "Wrong password");
        assert!(!tokens.has_token());
    }

    #[tokio::test]
    async fn test_logout_clears_token_even_when_request_fails() {
        let transport = MockTransport::new();
        transport.fail(Method::Post, "/auth/logout", "offline");
        let tokens = MemoryTokenStore::with_token("jwt");
        let client = ApiClient::new(transport, tokens.clone());

        client.logout().await;
        assert!(!tokens.has_token());
    }

    #[tokio::test]
    async fn test_reset_password_posts_token() {
        let transport = MockTransport::new();
        transport.respond(Method::Post, "/auth/reset-password", 204, "");
        let client = ApiClient::new(transport.clone(), MemoryTokenStore::new());

        client.reset_password("abc", "n3w-secret").await.unwrap();
        let body = transport.last_request().unwrap().body.unwrap();
        assert_eq!(body["token"], "abc");
        assert_eq!(body["password"], "n3w-secret");
    }
}
