use api::{ApiClient, ApiConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Client = ApiClient<api::FetchTransport, api::CookieTokenStore>;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Client = ApiClient<api::MockTransport, api::MemoryTokenStore>;

/// Build the API client for the current platform.
///
/// In the browser this talks to the configured base URL with the token kept in
/// a cookie. Elsewhere it uses the in-memory transport, which answers 404 to
/// everything until routes are registered on it.
pub fn make_client() -> Client {
    let config = ApiConfig::from_env();
    tracing::debug!("API base URL: {}", config.base_url);

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ApiClient::new(api::FetchTransport::new(config), api::CookieTokenStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ApiClient::new(api::MockTransport::new(), api::MemoryTokenStore::new())
    }
}
