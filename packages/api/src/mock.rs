use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::request::{ApiRequest, Method};
use crate::transport::{RawResponse, Transport};

#[derive(Clone, Debug)]
enum Reply {
    Response(RawResponse),
    Failure(String),
}

#[derive(Debug, Default)]
struct Routes {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    requests: Vec<ApiRequest>,
}

/// In-memory Transport for testing and native fallback.
///
/// Replies are queued per method + path; the last queued reply for a route is
/// repeated once the queue drains. Unrouted requests answer 404. Every request
/// is recorded, query and bearer token included.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<Routes>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method path`.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.push(method, path, Reply::Response(RawResponse::new(status, body)))
    }

    /// Queue a JSON reply with status 200.
    pub fn respond_json(&self, method: Method, path: &str, body: serde_json::Value) -> &Self {
        self.respond(method, path, 200, body.to_string())
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, method: Method, path: &str, reason: &str) -> &Self {
        self.push(method, path, Reply::Failure(reason.to_string()))
    }

    fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.routes.lock().unwrap().requests.clone()
    }

    /// Requests sent to `path`, oldest first.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.routes.lock().unwrap().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let mut routes = self.routes.lock().unwrap();
        routes.requests.push(request.clone());

        let reply = match routes
            .replies
            .get_mut(&(request.method, request.path.clone()))
        {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Failure(reason)) => Err(ApiError::Network(reason)),
            None => Ok(RawResponse::new(404, r#"{"message":"Not found"}"#)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unrouted_request_is_404() {
        let transport = MockTransport::new();
        let response = transport.send(&ApiRequest::get("/nope")).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_queue_then_repeat_last() {
        let transport = MockTransport::new();
        transport
            .respond(Method::Get, "/a", 200, "first")
            .respond(Method::Get, "/a", 500, "second");

        let req = ApiRequest::get("/a");
        assert_eq!(transport.send(&req).await.unwrap().body, "first");
        assert_eq!(transport.send(&req).await.unwrap().body, "second");
        assert_eq!(transport.send(&req).await.unwrap().body, "second");
    }

    #[tokio::test]
    async fn test_routes_are_method_specific() {
        let transport = MockTransport::new();
        transport.respond(Method::Delete, "/a", 204, "");
        let response = transport.send(&ApiRequest::get("/a")).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_failure_reply() {
        let transport = MockTransport::new();
        transport.fail(Method::Get, "/a", "offline");
        let err = transport.send(&ApiRequest::get("/a")).await.unwrap_err();
        assert_eq!(err, ApiError::Network("offline".to_string()));
    }
}
