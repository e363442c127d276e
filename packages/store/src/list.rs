//! # Paginated, filtered, searchable list controller
//!
//! One [`ListController`] backs every collection screen. It owns the query
//! (text search, per-column filters, page, page size) and the last page the
//! server returned. Every state change that needs data returns a
//! [`ListFetch`]; the view performs the request and hands the result back to
//! [`ListController::complete`].
//!
//! Changing the search text, a filter or the page size returns to the first
//! page. Pages are zero-based throughout.
//!
//! | Operation | Page afterwards | Fetch |
//! |-----------|-----------------|-------|
//! | `set_query` / `set_filter` / `clear_filter` / `set_per_page` | 0 | always |
//! | `first` / `prev` / `next` / `last` | moved | `None` at the boundary |
//! | `refresh` | unchanged | always |

use api::models::{Page, PageMeta};
use api::{ApiError, ListQuery};

use crate::sequence::{Completion, Sequencer, Ticket};

/// A request the view must perform for the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFetch {
    pub ticket: Ticket,
    pub query: ListQuery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListController<T> {
    query: ListQuery,
    items: Vec<T>,
    meta: Option<PageMeta>,
    loading: bool,
    sequencer: Sequencer,
}

impl<T> ListController<T> {
    pub fn new(per_page: u32) -> Self {
        Self {
            query: ListQuery::new(per_page),
            items: Vec::new(),
            meta: None,
            loading: false,
            sequencer: Sequencer::new(),
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.query.filters.get(key).map(String::as_str)
    }

    /// Initial load.
    pub fn load(&mut self) -> ListFetch {
        self.begin()
    }

    /// Re-request the current page, e.g. after a create or delete.
    pub fn refresh(&mut self) -> ListFetch {
        self.begin()
    }

    /// New search text. Callers debounce keystrokes before calling this.
    pub fn set_query(&mut self, text: impl Into<String>) -> ListFetch {
        let text = text.into();
        self.query.search = (!text.trim().is_empty()).then_some(text);
        self.query.page = 0;
        self.begin()
    }

    /// Set or clear (`None` / empty) a column filter.
    pub fn set_filter(&mut self, key: &str, value: Option<String>) -> ListFetch {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                self.query.filters.insert(key.to_string(), value);
            }
            None => {
                self.query.filters.remove(key);
            }
        }
        self.query.page = 0;
        self.begin()
    }

    pub fn clear_filter(&mut self, key: &str) -> ListFetch {
        self.set_filter(key, None)
    }

    pub fn set_per_page(&mut self, per_page: u32) -> ListFetch {
        self.query.per_page = per_page.max(1);
        self.query.page = 0;
        self.begin()
    }

    pub fn can_prev(&self) -> bool {
        self.query.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.query.page < self.last_page()
    }

    pub fn first(&mut self) -> Option<ListFetch> {
        self.move_to(0)
    }

    pub fn prev(&mut self) -> Option<ListFetch> {
        let target = self.query.page.checked_sub(1)?;
        self.move_to(target)
    }

    pub fn next(&mut self) -> Option<ListFetch> {
        if !self.can_next() {
            return None;
        }
        self.move_to(self.query.page + 1)
    }

    pub fn last(&mut self) -> Option<ListFetch> {
        self.move_to(self.last_page())
    }

    pub fn go_to(&mut self, nav: PageNav) -> Option<ListFetch> {
        match nav {
            PageNav::First => self.first(),
            PageNav::Prev => self.prev(),
            PageNav::Next => self.next(),
            PageNav::Last => self.last(),
        }
    }

    /// Apply a response. Only the most recent fetch is ever applied.
    pub fn complete(&mut self, fetch: &ListFetch, result: Result<Page<T>, ApiError>) -> Completion {
        if !self.sequencer.is_current(fetch.ticket) {
            tracing::debug!("dropping stale list response (page {})", fetch.query.page);
            return Completion::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.meta = Some(page.meta);
                Completion::Applied
            }
            Err(err) => {
                // The page on screen is still the last applied one.
                self.query.page = self.meta.as_ref().map_or(0, |m| m.current_page);
                Completion::Failed(err)
            }
        }
    }

    /// True once a fetch has returned zero records.
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.meta.is_some() && self.items.is_empty()
    }

    pub fn range_label(&self) -> String {
        self.meta
            .as_ref()
            .map(PageMeta::range_label)
            .unwrap_or_default()
    }

    fn last_page(&self) -> u32 {
        self.meta.as_ref().map(PageMeta::last_page).unwrap_or(0)
    }

    fn move_to(&mut self, page: u32) -> Option<ListFetch> {
        if page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.begin())
    }

    fn begin(&mut self) -> ListFetch {
        self.loading = true;
        ListFetch {
            ticket: self.sequencer.issue(),
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::Event;
    use api::{ApiClient, Events, MemoryTokenStore, Method, MockTransport};
    use serde_json::json;

    fn meta(current_page: u32, total: u64) -> PageMeta {
        PageMeta {
            current_page,
            per_page: 10,
            total,
            total_pages: total.div_ceil(10) as u32,
        }
    }

    fn page(current_page: u32, total: u64, count: usize) -> Page<u32> {
        Page {
            data: (0..count as u32).collect(),
            meta: meta(current_page, total),
        }
    }

    fn loaded(total: u64) -> ListController<u32> {
        let mut list = ListController::new(10);
        let fetch = list.load();
        list.complete(&fetch, Ok(page(0, total, 10)));
        list
    }

    #[test]
    fn test_next_and_prev_respect_bounds() {
        let mut list = loaded(47);
        assert!(!list.can_prev());
        assert!(list.prev().is_none());

        let fetch = list.next().unwrap();
        assert_eq!(fetch.query.page, 1);
        let fetch = list.last().unwrap();
        assert_eq!(fetch.query.page, 4);
        assert!(!list.can_next());
        assert!(list.next().is_none());
        assert_eq!(list.first().unwrap().query.page, 0);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut list = loaded(47);
        list.next();
        let fetch = list.next().unwrap();
        assert_eq!(fetch.query.page, 2);

        let fetch = list.set_filter("status", Some("done".to_string()));
        assert_eq!(fetch.query.page, 0);
        assert_eq!(fetch.query.filters.get("status").map(String::as_str), Some("done"));

        let fetch = list.clear_filter("status");
        assert!(fetch.query.filters.is_empty());
    }

    #[tokio::test]
    async fn test_status_filter_on_third_page_requests_page_zero() {
        let transport = MockTransport::new();
        transport.respond_json(
            Method::Get,
            "/admin/events",
            json!({"data": [], "meta": {"currentPage": 0, "perPage": 10, "total": 47, "totalPages": 5}}),
        );
        let client = ApiClient::new(transport.clone(), MemoryTokenStore::new());
        let mut list: ListController<Event> = ListController::new(10);

        let fetch = list.load();
        let result = client.list::<Events>(&fetch.query).await;
        list.complete(&fetch, result);
        list.next();
        list.next();
        assert_eq!(list.page(), 2);

        let fetch = list.set_filter("status", Some("ongoing".to_string()));
        client.list::<Events>(&fetch.query).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_value("page"), Some("0"));
        assert_eq!(sent.query_value("status"), Some("ongoing"));
    }

    #[test]
    fn test_search_resets_page_and_blank_clears() {
        let mut list = loaded(47);
        list.last();
        let fetch = list.set_query("sari");
        assert_eq!(fetch.query.page, 0);
        assert_eq!(fetch.query.search.as_deref(), Some("sari"));
        assert_eq!(list.set_query("  ").query.search, None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut list: ListController<u32> = ListController::new(10);
        let old = list.load();
        let new = list.set_query("ab");

        assert_eq!(list.complete(&new, Ok(page(0, 1, 1))), Completion::Applied);
        assert_eq!(list.complete(&old, Ok(page(0, 30, 10))), Completion::Stale);
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_page() {
        let mut list = loaded(47);
        let fetch = list.next().unwrap();
        let err = ApiError::Network("offline".to_string());

        assert_eq!(list.complete(&fetch, Err(err.clone())), Completion::Failed(err));
        assert!(!list.is_loading());
        assert_eq!(list.items().len(), 10);
        assert_eq!(list.meta().unwrap().total, 47);
    }

    #[test]
    fn test_failed_page_change_returns_to_displayed_page() {
        let mut list = loaded(47);
        let fetch = list.next().unwrap();
        list.complete(&fetch, Err(ApiError::Network("offline".to_string())));

        assert_eq!(list.page(), 0);
        assert!(!list.can_prev());
        assert_eq!(list.next().unwrap().query.page, 1);
    }

    #[test]
    fn test_failed_first_load_stays_on_page_zero() {
        let mut list: ListController<u32> = ListController::new(10);
        let fetch = list.load();
        list.complete(&fetch, Err(ApiError::Network("offline".to_string())));
        assert_eq!(list.page(), 0);
        assert!(list.meta().is_none());
    }

    #[test]
    fn test_empty_result_shows_empty_state() {
        let mut list: ListController<u32> = ListController::new(10);
        let fetch = list.load();
        assert!(!list.is_empty_state());
        list.complete(&fetch, Ok(page(0, 0, 0)));
        assert!(list.is_empty_state());
        assert_eq!(list.range_label(), "0 to 0 of 0");
    }

    #[test]
    fn test_range_label_on_third_page() {
        let mut list: ListController<u32> = ListController::new(10);
        let fetch = list.load();
        list.complete(&fetch, Ok(page(2, 47, 10)));
        assert_eq!(list.range_label(), "21 to 30 of 47");
        assert!(!list.is_empty_state());
    }

    #[test]
    fn test_per_page_change_resets_page() {
        let mut list = loaded(47);
        list.next();
        let fetch = list.set_per_page(25);
        assert_eq!(fetch.query.page, 0);
        assert_eq!(fetch.query.per_page, 25);
    }
}
