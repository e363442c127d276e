//! # List envelope: `{ data, meta }`
//!
//! Collection endpoints answer with a page of records plus pagination metadata.
//! `currentPage` is zero-based, matching the `page` query parameter the client
//! sends. Endpoints that answer with a bare array are adapted through
//! [`Page::from_items`] so callers always see the same shape.

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside a page of records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl PageMeta {
    /// Index of the last page (zero when there are no pages).
    pub fn last_page(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }

    /// One-based index of the first record on this page, 0 when empty.
    pub fn first_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let first = u64::from(self.current_page) * u64::from(self.per_page) + 1;
        first.min(self.total)
    }

    /// One-based index of the last record on this page.
    pub fn last_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let end = (u64::from(self.current_page) + 1) * u64::from(self.per_page);
        end.min(self.total)
    }

    /// `"21 to 30 of 47"`.
    pub fn range_label(&self) -> String {
        format!("{} to {} of {}", self.first_item(), self.last_item(), self.total)
    }
}

/// A page of records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Wrap an unpaginated collection as a single page.
    pub fn from_items(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        let meta = PageMeta {
            current_page: 0,
            per_page: data.len() as u32,
            total,
            total_pages: u32::from(total > 0),
        };
        Self { data, meta }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(current_page: u32, per_page: u32, total: u64) -> PageMeta {
        PageMeta {
            current_page,
            per_page,
            total,
            total_pages: total.div_ceil(u64::from(per_page)) as u32,
        }
    }

    #[test]
    fn test_range_label_middle_page() {
        assert_eq!(meta(2, 10, 47).range_label(), "21 to 30 of 47");
    }

    #[test]
    fn test_range_label_last_partial_page() {
        let m = meta(4, 10, 47);
        assert_eq!(m.range_label(), "41 to 47 of 47");
        assert_eq!(m.last_page(), 4);
    }

    #[test]
    fn test_range_label_empty() {
        let m = PageMeta::default();
        assert_eq!(m.range_label(), "0 to 0 of 0");
        assert_eq!(m.last_page(), 0);
    }

    #[test]
    fn test_deserialize_envelope() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"data":[1,2,3],"meta":{"currentPage":1,"perPage":3,"total":9,"totalPages":3}}"#,
        )
        .unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.range_label(), "4 to 6 of 9");
    }

    #[test]
    fn test_from_items() {
        let page = Page::from_items(vec!["a", "b"]);
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.meta.total_pages, 1);
        assert_eq!(page.meta.range_label(), "1 to 2 of 2");
        assert!(Page::<u8>::from_items(Vec::new()).meta.total_pages == 0);
    }
}
