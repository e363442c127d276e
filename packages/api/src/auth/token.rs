//! # Token storage
//!
//! The session is a single bearer token. [`TokenStore`] is the seam the HTTP
//! wrapper and the route guard read it through:
//!
//! - [`MemoryTokenStore`]: shared in-memory slot for tests and native builds.
//! - `CookieTokenStore` (web): the `token` cookie with a fixed 30-day expiry.
//!
//! The cookie string helpers are pure so the browser store stays a thin shell.

use std::sync::{Arc, Mutex};

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Fixed lifetime of the session cookie (30 days).
pub const TOKEN_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory TokenStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set_token(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Value of cookie `name` in a `document.cookie` string. Empty values count as absent.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie`-style assignment for `document.cookie`.
pub fn format_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}

/// Assignment that deletes cookie `name`.
pub fn expired_cookie(name: &str) -> String {
    format_cookie(name, "", 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let jar = "theme=dark; token=abc.def.ghi; lang=id";
        assert_eq!(parse_cookie(jar, "token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(parse_cookie(jar, "lang").as_deref(), Some("id"));
        assert_eq!(parse_cookie(jar, "missing"), None);
    }

    #[test]
    fn test_parse_cookie_ignores_prefix_matches_and_empty() {
        assert_eq!(parse_cookie("xtoken=1; token=", "token"), None);
        assert_eq!(parse_cookie("", "token"), None);
    }

    #[test]
    fn test_format_and_expire() {
        assert_eq!(
            format_cookie(TOKEN_COOKIE, "t0k", TOKEN_MAX_AGE_SECS),
            "token=t0k; Path=/; Max-Age=2592000; SameSite=Lax"
        );
        assert_eq!(expired_cookie(TOKEN_COOKIE), "token=; Path=/; Max-Age=0; SameSite=Lax");
    }

    #[test]
    fn test_memory_store_shares_state_between_clones() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();
        assert!(!store.has_token());
        clone.set_token("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear();
        assert!(clone.token().is_none());
    }
}
