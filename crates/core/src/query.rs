//! List query pipeline: category/stock/search filters, then pagination.
//!
//! Filters are cumulative (AND) and order-independent predicates; only the
//! pagination metadata depends on the final filtered count.

use serde::Serialize;

use crate::product::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Parsed list-query parameters. All filters optional.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub category: Option<String>,
    /// Raw literal from the query string; `"true"` selects in-stock
    /// products, any other value selects out-of-stock.
    pub in_stock: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            category: None,
            in_stock: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Build params from raw query-string values. Non-numeric `page`/`limit`
    /// fall back to the defaults; both are clamped to at least 1.
    pub fn from_raw(
        category: Option<String>,
        in_stock: Option<String>,
        search: Option<String>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        Self {
            category,
            in_stock,
            search,
            page: parse_or(page, DEFAULT_PAGE),
            limit: parse_or(limit, DEFAULT_LIMIT),
        }
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
        .max(1)
}

/// Pagination metadata for a filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub limit: usize,
    /// Count after filtering, before slicing.
    pub total: usize,
    pub pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of a filtered product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub page: Vec<Product>,
    pub pagination: PageInfo,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Apply filters and pagination to a store snapshot.
pub fn query(products: &[Product], params: &ListParams) -> QueryResult {
    let mut filtered: Vec<&Product> = products.iter().collect();

    if let Some(category) = &params.category {
        let wanted = category.to_lowercase();
        filtered.retain(|p| p.category.to_lowercase() == wanted);
    }

    if let Some(in_stock) = &params.in_stock {
        let wanted = in_stock == "true";
        filtered.retain(|p| p.in_stock == wanted);
    }

    if let Some(search) = &params.search {
        // Name and description only; the dedicated search endpoint also
        // matches category, this filter deliberately does not.
        let needle = search.to_lowercase();
        filtered.retain(|p| contains_ci(&p.name, &needle) || contains_ci(&p.description, &needle));
    }

    let total = filtered.len();
    // No upper bound is enforced on page/limit, so huge parseable values
    // are valid input; saturate instead of overflowing.
    let start = (params.page - 1).saturating_mul(params.limit);
    let end = start.saturating_add(params.limit);

    let page: Vec<Product> = filtered
        .into_iter()
        .skip(start)
        .take(params.limit)
        .cloned()
        .collect();

    QueryResult {
        page,
        pagination: PageInfo {
            page: params.page,
            limit: params.limit,
            total,
            pages: total.div_ceil(params.limit),
            has_next: end < total,
            has_prev: params.page > 1,
        },
    }
}

/// Dedicated search: unpaginated, matches name, description, and category.
pub fn search_all(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            contains_ci(&p.name, &needle)
                || contains_ci(&p.description, &needle)
                || contains_ci(&p.category, &needle)
        })
        .cloned()
        .collect()
}
