//! Pagination utilities shared by the service and server layers.
//!
//! Provides a simple `Pagination` struct for inbound parameters and a
//! `Page` envelope for paginated collection responses.

use serde::Serialize;

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to `u64`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }

    /// The page number reported back to the client.
    pub fn current_page(self) -> u32 {
        if self.page == 0 { 1 } else { self.page }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 5 } }
}

/// One page of a collection plus count metadata.
///
/// A page index past the end carries an empty `items` list, never an error.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
}

#[cfg(test)]
mod tests {
    use super::{Page, Pagination};

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 5);
    }

    #[test]
    fn page_serializes_with_metadata() {
        let page = Page { items: vec![1, 2, 3], total: 8, pages: 2, current_page: 1 };
        let json = serde_json::to_value(&page).expect("serialize");
        assert_eq!(json["total"], 8);
        assert_eq!(json["pages"], 2);
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["items"].as_array().map(|a| a.len()), Some(3));
    }
}
