use crate::error::ApiError;
use crate::request::ApiRequest;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async seam for sending requests.
///
/// Implementations only move bytes; status classification and decoding happen
/// in [`crate::ApiClient`]. Only transport-level failures are returned as `Err`.
pub trait Transport {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, ApiError>>;
}
