//! # Notifications and error routing
//!
//! Every failed request in the UI goes through [`report`]. An unauthorized
//! response raises the global [`AuthStatus`] flag (the re-login modal reacts
//! to it) and produces no toast; anything else becomes an error toast carrying
//! the server's message.

use api::ApiError;

use crate::session::AuthStatus;

const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

impl Level {
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "toast-success",
            Level::Info => "toast-info",
            Level::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

/// Dismissible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Success, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Info, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorRoute {
    Unauthorized,
    Toast(String),
}

pub fn route_error(err: &ApiError) -> ErrorRoute {
    if err.is_unauthorized() {
        ErrorRoute::Unauthorized
    } else {
        ErrorRoute::Toast(err.user_message())
    }
}

pub fn report(auth: &mut AuthStatus, notifications: &mut Notifications, err: &ApiError) {
    tracing::error!("request failed: {}", err);
    match route_error(err) {
        ErrorRoute::Unauthorized => auth.flag(),
        ErrorRoute::Toast(message) => {
            notifications.error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::error::GENERIC_MESSAGE;

    #[test]
    fn test_unauthorized_sets_flag_without_toast() {
        let mut auth = AuthStatus::default();
        let mut notifications = Notifications::new();
        let err = ApiError::from_response(401, r#"{"message":"jwt expired"}"#);

        report(&mut auth, &mut notifications, &err);
        assert!(auth.unauthorized);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_server_error_becomes_toast() {
        let mut auth = AuthStatus::default();
        let mut notifications = Notifications::new();
        let err = ApiError::from_response(409, r#"{"message":"Bedroom is full"}"#);

        report(&mut auth, &mut notifications, &err);
        assert!(!auth.unauthorized);
        assert_eq!(notifications.items().len(), 1);
        assert_eq!(notifications.items()[0].message, "Bedroom is full");
        assert_eq!(notifications.items()[0].level, Level::Error);
    }

    #[test]
    fn test_toast_falls_back_to_generic_message() {
        let err = ApiError::from_response(500, "");
        assert_eq!(route_error(&err), ErrorRoute::Toast(GENERIC_MESSAGE.to_string()));
    }

    #[test]
    fn test_dismiss_and_cap() {
        let mut notifications = Notifications::new();
        let first = notifications.success("Saved");
        for i in 0..MAX_VISIBLE {
            notifications.info(format!("note {i}"));
        }
        assert_eq!(notifications.items().len(), MAX_VISIBLE);
        assert!(notifications.items().iter().all(|n| n.id != first));

        let last = notifications.items()[MAX_VISIBLE - 1].id;
        notifications.dismiss(last);
        assert_eq!(notifications.items().len(), MAX_VISIBLE - 1);
    }
}
