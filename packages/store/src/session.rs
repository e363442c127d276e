//! App-wide session containers.
//!
//! Both live in Dioxus context as signals. [`CurrentUser`] changes only on
//! login, session bootstrap and logout; [`AuthStatus`] is raised by the error
//! router and lowered by the re-authentication flow.

use api::models::User;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrentUser {
    pub user: Option<User>,
    pub loading: bool,
}

impl CurrentUser {
    pub fn bootstrapping() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(User::display_name).unwrap_or("")
    }
}

/// Raised when any request comes back 401.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub unauthorized: bool,
}

impl AuthStatus {
    pub fn flag(&mut self) {
        if !self.unauthorized {
            tracing::warn!("Session rejected by server");
        }
        self.unauthorized = true;
    }

    pub fn reset(&mut self) {
        self.unauthorized = false;
    }
}
