use crate::auth::TokenStore;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Region, RegionLevel};
use crate::request::ApiRequest;
use crate::transport::Transport;

/// Path listing the regions of `level` under `parent_id`.
///
/// Provinces are the root list; every other level needs its parent's id.
pub fn region_path(level: RegionLevel, parent_id: Option<&str>) -> Option<String> {
    match (level, parent_id) {
        (RegionLevel::Province, _) => Some("/address/provinces".to_string()),
        (RegionLevel::Regency, Some(id)) => Some(format!("/address/provinces/{id}/regencies")),
        (RegionLevel::District, Some(id)) => Some(format!("/address/regencies/{id}/districts")),
        (RegionLevel::Village, Some(id)) => Some(format!("/address/districts/{id}/villages")),
        _ => None,
    }
}

impl<T: Transport, K: TokenStore> ApiClient<T, K> {
    /// Options for one level of the address hierarchy.
    pub async fn regions(
        &self,
        level: RegionLevel,
        parent_id: Option<&str>,
    ) -> Result<Vec<Region>, ApiError> {
        let path = region_path(level, parent_id).ok_or_else(|| {
            ApiError::Decode(format!("{} list needs a parent id", level.label()))
        })?;
        self.send(ApiRequest::get(path)).await
    }

    pub async fn provinces(&self) -> Result<Vec<Region>, ApiError> {
        self.regions(RegionLevel::Province, None).await
    }

    pub async fn regencies(&self, province_id: &str) -> Result<Vec<Region>, ApiError> {
        self.regions(RegionLevel::Regency, Some(province_id)).await
    }

    pub async fn districts(&self, regency_id: &str) -> Result<Vec<Region>, ApiError> {
        self.regions(RegionLevel::District, Some(regency_id)).await
    }

    pub async fn villages(&self, district_id: &str) -> Result<Vec<Region>, ApiError> {
        self.regions(RegionLevel::Village, Some(district_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::mock::MockTransport;
    use crate::request::Method;
    use serde_json::json;

    #[test]
    fn test_region_paths() {
        assert_eq!(
            region_path(RegionLevel::Province, None).as_deref(),
            Some("/address/provinces")
        );
        assert_eq!(
            region_path(RegionLevel::Regency, Some("32")).as_deref(),
            Some("/address/provinces/32/regencies")
        );
        assert_eq!(
            region_path(RegionLevel::Village, Some("327301")).as_deref(),
            Some("/address/districts/327301/villages")
        );
        assert_eq!(region_path(RegionLevel::District, None), None);
    }

    #[tokio::test]
    async fn test_regencies_are_scoped_to_province() {
        let transport = MockTransport::new();
        transport.respond_json(
            Method::Get,
            "/address/provinces/32/regencies",
            json!({"data": [{"id": "3273", "name": "Kota Bandung"}]}),
        );
        let client = ApiClient::new(transport.clone(), MemoryTokenStore::new());

        let regencies = client.regencies("32").await.unwrap();
        assert_eq!(regencies[0].name, "Kota Bandung");
        assert_eq!(
            transport.last_request().unwrap().path,
            "/address/provinces/32/regencies"
        );
    }

    #[tokio::test]
    async fn test_missing_parent_is_rejected_without_request() {
        let transport = MockTransport::new();
        let client = ApiClient::new(transport.clone(), MemoryTokenStore::new());
        assert!(client.regions(RegionLevel::Village, None).await.is_err());
        assert!(transport.requests().is_empty());
    }
}
