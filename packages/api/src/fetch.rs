//! # Browser fetch transport
//!
//! [`FetchTransport`] is the [`Transport`] used on the **web platform**. It sends
//! requests through `gloo-net` (the browser `fetch` API) against the configured
//! base URL.
//!
//! ## Timeout
//!
//! `fetch` has no timeout of its own. Each request gets an `AbortController`
//! whose `abort()` is armed with a `gloo-timers` [`Timeout`]; dropping the
//! `Timeout` when the response arrives disarms it. An aborted request surfaces as
//! [`ApiError::Network`].

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::{ApiRequest, Method};
use crate::transport::{RawResponse, Transport};

#[derive(Clone, Debug)]
pub struct FetchTransport {
    config: ApiConfig,
}

impl FetchTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = builder
            .header("Accept", "application/json")
            .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::Network("AbortController unavailable".to_string()))?;
        let signal = controller.signal();
        let _deadline = Timeout::new(self.config.timeout_ms, move || controller.abort());

        let builder = self.builder(request).abort_signal(Some(&signal));
        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        let response = sent.map_err(|e| {
            tracing::warn!("{} {} failed: {}", request.method, request.path, e);
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
