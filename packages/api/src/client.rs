//! # HTTP request wrapper
//!
//! [`ApiClient`] is the single choke point for outbound API calls. It pairs a
//! [`Transport`] (how bytes move) with a [`TokenStore`] (where the session token
//! lives):
//!
//! 1. attach `Authorization: Bearer <token>` when a token is stored;
//! 2. send through the transport;
//! 3. on a non-2xx status, reject with [`ApiError::from_response`] (the server's
//!    own payload, classified once);
//! 4. on success, decode the body, unwrapping a `{ "data": ... }` envelope.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::TokenStore;
use crate::error::ApiError;
use crate::models::Page;
use crate::request::ApiRequest;
use crate::transport::Transport;

#[derive(Clone, Debug)]
pub struct ApiClient<T, K> {
    transport: T,
    tokens: K,
}

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    pub fn new(transport: T, tokens: K) -> Self {
        Self { transport, tokens }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn tokens(&self) -> &K {
        &self.tokens
    }

    /// Send a request and decode the (envelope-unwrapped) body.
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let body = self.execute(request).await?;
        let value = parse_body(&body)?;
        decode(unwrap_data(value))
    }

    /// Send a request for a paginated collection.
    ///
    /// Accepts a `{ data, meta }` envelope, a `{ data }` body without `meta`,
    /// or a bare array. The last two are treated as a single page.
    pub async fn send_page<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Page<R>, ApiError> {
        let body = self.execute(request).await?;
        match parse_body(&body)? {
            Value::Object(map) if !map.contains_key("meta") => {
                decode(unwrap_data(Value::Object(map))).map(Page::from_items)
            }
            Value::Array(items) => decode(Value::Array(items)).map(Page::from_items),
            value => decode(value),
        }
    }

    /// Send a request whose response body is irrelevant.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, mut request: ApiRequest) -> Result<String, ApiError> {
        if let Some(token) = self.tokens.token() {
            request.bearer = Some(token);
        }

        tracing::debug!("{} {} {:?}", request.method, request.path, request.query);

        let response = self.transport.send(&request).await.inspect_err(|e| {
            tracing::warn!("{} {}: {}", request.method, request.path, e);
        })?;

        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body);
            tracing::warn!("{} {} -> {}: {}", request.method, request.path, response.status, err);
            return Err(err);
        }

        Ok(response.body)
    }
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::mock::MockTransport;
    use crate::models::TypeRef;
    use crate::request::Method;
    use serde_json::json;

    fn client() -> (ApiClient<MockTransport, MemoryTokenStore>, MockTransport, MemoryTokenStore) {
        let transport = MockTransport::new();
        let tokens = MemoryTokenStore::new();
        (ApiClient::new(transport.clone(), tokens.clone()), transport, tokens)
    }

    #[tokio::test]
    async fn test_attaches_bearer_token_when_present() {
        let (client, transport, tokens) = client();
        transport.respond_json(Method::Get, "/auth/me", json!({"id": "1", "name": "x"}));

        let _: Value = client.send(ApiRequest::get("/auth/me")).await.unwrap();
        assert_eq!(transport.last_request().unwrap().bearer, None);

        tokens.set_token("secret");
        let _: Value = client.send(ApiRequest::get("/auth/me")).await.unwrap();
        assert_eq!(transport.last_request().unwrap().bearer.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_unwraps_data_envelope() {
        let (client, transport, _) = client();
        transport.respond_json(
            Method::Get,
            "/admin/document-types/7",
            json!({"data": {"id": "7", "name": "Akta Kelahiran"}}),
        );
        let item: TypeRef = client.send(ApiRequest::get("/admin/document-types/7")).await.unwrap();
        assert_eq!(item.name, "Akta Kelahiran");
    }

    #[tokio::test]
    async fn test_accepts_bare_body() {
        let (client, transport, _) = client();
        transport.respond_json(Method::Get, "/x", json!({"id": "1", "name": "Bare"}));
        let item: TypeRef = client.send(ApiRequest::get("/x")).await.unwrap();
        assert_eq!(item.name, "Bare");
    }

    #[tokio::test]
    async fn test_non_success_rejects_with_server_payload() {
        let (client, transport, _) = client();
        transport.respond(Method::Post, "/admin/bedrooms", 409, r#"{"message":"Name taken"}"#);
        let err = client
            .send::<Value>(ApiRequest::post("/admin/bedrooms"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "Name taken".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unauthorized_is_classified() {
        let (client, transport, _) = client();
        transport.respond(Method::Get, "/admin/users", 401, "");
        let err = client
            .send_page::<Value>(ApiRequest::get("/admin/users"))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_page_from_envelope_and_bare_array() {
        let (client, transport, _) = client();
        transport.respond_json(
            Method::Get,
            "/paged",
            json!({"data": [{"id": "1", "name": "a"}], "meta": {"currentPage": 0, "perPage": 10, "total": 1, "totalPages": 1}}),
        );
        transport.respond_json(Method::Get, "/bare", json!([{"id": "1", "name": "a"}, {"id": "2", "name": "b"}]));

        let paged: Page<TypeRef> = client.send_page(ApiRequest::get("/paged")).await.unwrap();
        assert_eq!(paged.meta.total, 1);

        let bare: Page<TypeRef> = client.send_page(ApiRequest::get("/bare")).await.unwrap();
        assert_eq!(bare.data.len(), 2);
        assert_eq!(bare.meta.total, 2);
    }

    #[tokio::test]
    async fn test_page_without_meta_counts_its_rows() {
        let (client, transport, _) = client();
        transport.respond_json(
            Method::Get,
            "/admin/inventories",
            json!({"data": [{"id": "1", "name": "Kasur"}, {"id": "2", "name": "Lemari"}, {"id": "3", "name": "Meja"}]}),
        );
        let page: Page<TypeRef> = client
            .send_page(ApiRequest::get("/admin/inventories"))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.range_label(), "1 to 3 of 3");
    }

    #[tokio::test]
    async fn test_decode_error_on_shape_mismatch() {
        let (client, transport, _) = client();
        transport.respond(Method::Get, "/x", 200, "not json");
        let err = client.send::<TypeRef>(ApiRequest::get("/x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_body_as_unit() {
        let (client, transport, _) = client();
        transport.respond(Method::Delete, "/admin/events/1", 204, "");
        client.send_unit(ApiRequest::delete("/admin/events/1")).await.unwrap();
        client
            .send::<()>(ApiRequest::delete("/admin/events/1"))
            .await
            .unwrap();
    }
}
