//! Debounced free-text search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::timer::sleep;

/// Collapses bursts of keystrokes into the last value typed.
///
/// Each [`submit`](Debouncer::submit) waits out the delay and then resolves
/// `Some(query)` only if no later submission happened meanwhile. Clones share
/// the same generation counter, so a clone captured by a spawned task still
/// sees newer keystrokes.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn submit(&self, query: String) -> Option<String> {
        let mine = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) == mine {
            Some(query)
        } else {
            tracing::trace!("debounced away: {:?}", query);
            None
        }
    }

    /// Drop any pending submission (e.g. the view unmounted).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, Donations, ListQuery, MemoryTokenStore, Method, MockTransport};
    use serde_json::json;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_keystroke_fires() {
        let debouncer = Debouncer::default();
        let first = debouncer.submit("a".to_string());
        let second = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            debouncer.submit("ab".to_string()).await
        };
        let (first, second) = tokio::join!(first, second);
        assert_eq!(first, None);
        assert_eq!(second.as_deref(), Some("ab"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_issues_one_request_for_final_text() {
        let transport = MockTransport::new();
        transport.respond_json(Method::Get, "/admin/donations", json!({"data": []}));
        let client = ApiClient::new(transport.clone(), MemoryTokenStore::new());
        let debouncer = Debouncer::default();

        let search = |text: &'static str| {
            let debouncer = debouncer.clone();
            let client = client.clone();
            async move {
                if let Some(text) = debouncer.submit(text.to_string()).await {
                    let mut query = ListQuery::new(10);
                    query.search = Some(text);
                    client.list::<Donations>(&query).await.unwrap();
                }
            }
        };

        let typed_later = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            search("ab").await
        };
        tokio::join!(search("a"), typed_later);

        let sent = transport.requests_to("/admin/donations");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].query_value("search"), Some("ab"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_submissions_both_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        assert_eq!(debouncer.submit("x".to_string()).await.as_deref(), Some("x"));
        assert_eq!(debouncer.submit("y".to_string()).await.as_deref(), Some("y"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let debouncer = Debouncer::default();
        let pending = debouncer.submit("gone".to_string());
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            debouncer.cancel();
        };
        let (result, ()) = tokio::join!(pending, cancel);
        assert_eq!(result, None);
    }
}
