//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the product list endpoint
/// (`?q=&page=&per_page=`).
///
/// When `per_page` is present the response uses the paginated
/// `{data, links, meta}` envelope; otherwise the full match list is
/// returned as `{data: [...]}`.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
