//! # Client configuration
//!
//! A browser build has no process environment, so values are baked in at
//! compile time through `option_env!` and fall back to development defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `API_BASE_URL` | `http://localhost:8000/api` | Prefix for every request path |
//! | `API_TIMEOUT_MS` | `30000` | Fixed per-request timeout |
//! | `API_PER_PAGE` | `10` | Default page size for list views |

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub per_page: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_ms: 30_000,
            per_page: 10,
        }
    }
}

impl ApiConfig {
    /// Build from compile-time environment.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("API_TIMEOUT_MS"),
            option_env!("API_PER_PAGE"),
        )
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>, per_page: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.base_url),
            timeout_ms: timeout_ms
                .and_then(|s| s.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.timeout_ms),
            per_page: per_page
                .and_then(|s| s.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.per_page),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ApiConfig::from_values(None, None, None), ApiConfig::default());
    }

    #[test]
    fn test_values_are_trimmed_and_validated() {
        let config = ApiConfig::from_values(Some("https://api.panti.id/v1/ "), Some("abc"), Some("25"));
        assert_eq!(config.base_url, "https://api.panti.id/v1");
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.per_page, 25);
    }

    #[test]
    fn test_url_joins_single_slash() {
        let config = ApiConfig::from_values(Some("http://x/api/"), None, None);
        assert_eq!(config.url("/admin/users"), "http://x/api/admin/users");
        assert_eq!(config.url("auth/me"), "http://x/api/auth/me");
    }
}
