//! Shared response envelope types for API handlers.
//!
//! Plain list and detail responses use a `{ "data": ... }` envelope.
//! List endpoints that received a `per_page` parameter answer with the
//! full paginated envelope `{ data, links, meta }` instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Pagination links, relative to the request path.
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
}

/// Paginated `{ data, links, meta }` response envelope.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

impl<T: Serialize> Paginated<T> {
    /// Assemble the envelope for one page.
    ///
    /// `page` is 1-based; `total` is the full row count for the query.
    pub fn new(data: Vec<T>, path: &str, page: i64, per_page: i64, total: i64) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let link = |p: i64| format!("{path}?page={p}&per_page={per_page}");

        Paginated {
            data,
            links: PageLinks {
                first: link(1),
                last: link(last_page),
                prev: (page > 1).then(|| link(page - 1)),
                next: (page < last_page).then(|| link(page + 1)),
            },
            meta: PageMeta {
                current_page: page,
                per_page,
                total,
                last_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_has_prev_and_next() {
        let page = Paginated::new(vec![1, 2], "/api/v1/catalog/products", 2, 2, 6);
        assert_eq!(page.meta.last_page, 3);
        assert!(page.links.prev.is_some());
        assert!(page.links.next.is_some());
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let page = Paginated::<i64>::new(vec![], "/p", 1, 10, 0);
        assert_eq!(page.meta.last_page, 1);
        assert!(page.links.prev.is_none());
        assert!(page.links.next.is_none());
    }

    #[test]
    fn last_page_rounds_up() {
        let page = Paginated::new(vec![1], "/p", 1, 10, 11);
        assert_eq!(page.meta.last_page, 2);
    }
}
