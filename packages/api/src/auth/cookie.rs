//! Cookie-backed TokenStore for the web platform.
//!
//! Errors from `document.cookie` are logged and swallowed: an unreadable
//! cookie behaves like a signed-out session.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::token::{expired_cookie, format_cookie, parse_cookie, TokenStore, TOKEN_COOKIE, TOKEN_MAX_AGE_SECS};

#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

impl CookieTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    fn write(assignment: &str) {
        let Some(document) = Self::document() else {
            tracing::warn!("document unavailable, cookie not written");
            return;
        };
        if let Err(e) = document.set_cookie(assignment) {
            tracing::warn!("Failed to write cookie: {:?}", e);
        }
    }
}

impl TokenStore for CookieTokenStore {
    fn token(&self) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        parse_cookie(&cookies, TOKEN_COOKIE)
    }

    fn set_token(&self, token: &str) {
        Self::write(&format_cookie(TOKEN_COOKIE, token, TOKEN_MAX_AGE_SECS));
    }

    fn clear(&self) {
        Self::write(&expired_cookie(TOKEN_COOKIE));
    }
}
