//! Session token persistence and login types.

mod session;
mod token;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod cookie;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookie::CookieTokenStore;

pub use session::{LoginRequest, LoginResponse};
pub use token::{
    expired_cookie, format_cookie, parse_cookie, MemoryTokenStore, TokenStore, TOKEN_COOKIE,
    TOKEN_MAX_AGE_SECS,
};
