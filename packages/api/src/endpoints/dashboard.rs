use crate::auth::TokenStore;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::DashboardSummary;
use crate::request::ApiRequest;
use crate::transport::Transport;

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    pub async fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        self.send(ApiRequest::get("/admin/dashboard")).await
    }
}
