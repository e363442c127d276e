//! One-shot record loads for detail and edit screens.
//!
//! A screen starts [`Load::Pending`] (or [`Load::Ready`] when there is nothing
//! to fetch) and settles exactly once, so the spinner never outlives the
//! request.

use api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Pending,
    Ready(T),
    Failed(ApiError),
}

impl<T> Load<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Load::Ready(value),
            Err(err) => Load::Failed(err),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Load::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Load::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Load<()> {
    /// Initial state for a form that only fetches when editing.
    pub fn for_form(editing: bool) -> Self {
        if editing {
            Load::Pending
        } else {
            Load::Ready(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::Event;
    use api::{ApiClient, Events, MemoryTokenStore, Method, MockTransport};

    #[test]
    fn test_new_form_is_ready_and_edit_form_waits() {
        assert_eq!(Load::for_form(false), Load::Ready(()));
        assert!(Load::for_form(true).is_pending());
    }

    #[tokio::test]
    async fn test_failed_fetch_settles_instead_of_pending() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/admin/events/9", 500, r#"{"message":"boom"}"#);
        let client = ApiClient::new(transport, MemoryTokenStore::new());

        let load = Load::from_result(client.fetch::<Events>("9").await);

        assert!(!load.is_pending());
        assert!(load.ready().is_none());
        assert_eq!(load.error().map(ApiError::user_message).as_deref(), Some("boom"));
    }

    #[test]
    fn test_success_is_ready() {
        let load: Load<Vec<Event>> = Load::from_result(Ok(Vec::new()));
        assert_eq!(load.ready().map(Vec::len), Some(0));
        assert!(load.error().is_none());
    }
}
