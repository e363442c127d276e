//! Route access control.

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Pages only meaningful without a session.
const AUTH_PATHS: [&str; 3] = ["/login", "/forgot-password", "/reset-password"];

/// Served regardless of session.
const PUBLIC_PREFIXES: [&str; 2] = ["/assets/", "/favicon.ico"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Decide whether `path` may render given whether a session token exists.
pub fn guard(path: &str, has_session: bool) -> Access {
    if PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Access::Allow;
    }

    let path = normalize(path);
    let is_auth_page = AUTH_PATHS.contains(&path);

    match (is_auth_page, has_session) {
        (true, true) => Access::Redirect(DASHBOARD_PATH),
        (true, false) => Access::Allow,
        (false, false) => Access::Redirect(LOGIN_PATH),
        (false, true) if path == "/" => Access::Redirect(DASHBOARD_PATH),
        (false, true) => Access::Allow,
    }
}

/// Strip query, fragment and trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_goes_to_login() {
        assert_eq!(guard("/dashboard", false), Access::Redirect(LOGIN_PATH));
        assert_eq!(guard("/users/12", false), Access::Redirect(LOGIN_PATH));
        assert_eq!(guard("/", false), Access::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_auth_pages_without_session() {
        assert_eq!(guard("/login", false), Access::Allow);
        assert_eq!(guard("/forgot-password", false), Access::Allow);
        assert_eq!(guard("/reset-password?token=abc", false), Access::Allow);
    }

    #[test]
    fn test_signed_in_skips_auth_pages() {
        assert_eq!(guard("/login", true), Access::Redirect(DASHBOARD_PATH));
        assert_eq!(guard("/login/", true), Access::Redirect(DASHBOARD_PATH));
        assert_eq!(guard("/", true), Access::Redirect(DASHBOARD_PATH));
        assert_eq!(guard("/donations", true), Access::Allow);
    }

    #[test]
    fn test_assets_always_allowed() {
        assert_eq!(guard("/assets/main.css", false), Access::Allow);
        assert_eq!(guard("/favicon.ico", true), Access::Allow);
    }
}
