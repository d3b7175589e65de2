//! # Filter / Sort / Paginate Pipeline
//!
//! The one piece of logic shared by every listing view:
//!
//! ```text
//! catalog ──apply_filters──▶ filtered ──apply_sort──▶ sorted ──paginate──▶ page
//! ```
//!
//! All three stages are pure: they borrow the catalog, never mutate it, and
//! return new vectors of references. Given the same inputs (and, for the
//! `trending` sort, the same [`SortContext::today`]) they return the same
//! output, so callers may recompute from scratch after every interaction.
//!
//! Nothing here can fail. An empty result is a normal value; unknown filter
//! keys and values of the wrong kind are ignored.

use serde::Serialize;

use crate::filter::{FilterKind, FilterState, FilterValue};
use crate::schema::{CatalogSchema, SortContext, SortKey};

/// Trims and lowercases a search string. Empty means "no search".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Keeps the items passing every effective filter and the search query.
///
/// Relative catalog order is preserved. With no effective filter and an
/// empty query the result is the whole catalog in its original order.
pub fn apply_filters<'a, T>(
    catalog: &'a [T],
    schema: &CatalogSchema<T>,
    filters: &FilterState,
    query: &str,
) -> Vec<&'a T> {
    let needle = normalize_query(query);
    let active: Vec<_> = schema.effective_filters(filters).collect();

    catalog
        .iter()
        .filter(|item| active.iter().all(|(def, value)| def.matches(item, value)))
        .filter(|item| needle.is_empty() || schema.matches_search(item, &needle))
        .collect()
}

/// Orders `items` by the comparator registered for `key`.
///
/// The sort is stable: items with equal keys keep their input order. A key
/// the schema does not offer leaves the order unchanged.
///
/// `trending` reads `ctx.today`; sorting the same items on different days may
/// yield different orders.
pub fn apply_sort<'a, T>(
    items: &[&'a T],
    schema: &CatalogSchema<T>,
    key: SortKey,
    ctx: &SortContext,
) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    match schema.sort(key) {
        Some(def) => sorted.sort_by(|a, b| def.compare(a, b, ctx)),
        None => {
            tracing::debug!(catalog = %schema.kind, sort = %key, "sort not offered, keeping order")
        }
    }
    sorted
}

/// `ceil(count / page_size)`, or 0 when there is nothing to show.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One page of a sorted sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<I> {
    pub items: Vec<I>,
    /// Requested 1-based page number.
    pub page: usize,
    pub page_size: usize,
    /// Length of the whole sequence being paged.
    pub total_items: usize,
    pub total_pages: usize,
}

impl<I> Page<I> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.page <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page >= 1 && self.page < self.total_pages
    }
}

/// Slices `[(page - 1) * page_size, page * page_size)` out of `items`.
///
/// Out-of-range requests (page 0, page past the end, page size 0) return an
/// empty page instead of failing.
pub fn paginate<I: Clone>(items: &[I], page: usize, page_size: usize) -> Page<I> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let slice = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        items[start..end].to_vec()
    };

    Page {
        items: slice,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

/// Number of filter keys with an effective value, plus one for a non-empty
/// search query.
pub fn active_filter_count<T>(
    schema: &CatalogSchema<T>,
    filters: &FilterState,
    query: &str,
) -> usize {
    let search = usize::from(!normalize_query(query).is_empty());
    schema.effective_filters(filters).count() + search
}

/// Runs the three stages end to end.
#[allow(clippy::too_many_arguments)]
pub fn run<'a, T>(
    catalog: &'a [T],
    schema: &CatalogSchema<T>,
    filters: &FilterState,
    query: &str,
    sort: SortKey,
    page: usize,
    page_size: usize,
    ctx: &SortContext,
) -> Page<&'a T> {
    let filtered = apply_filters(catalog, schema, filters, query);
    let sorted = apply_sort(&filtered, schema, sort, ctx);
    paginate(&sorted, page, page_size)
}

/// How many catalog items one option of a filter would keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: &'static str,
    pub count: usize,
}

/// A filter key with per-option counts. Keys without declared options carry
/// an empty option list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facet {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
    pub syntax: &'static str,
    pub options: Vec<FacetOption>,
}

/// Counts, for every declared option, the items that option alone retains.
pub fn facet_counts<T>(catalog: &[T], schema: &CatalogSchema<T>) -> Vec<Facet> {
    schema
        .filters
        .iter()
        .map(|def| Facet {
            key: def.key,
            label: def.label,
            kind: def.kind,
            syntax: def.kind.syntax(),
            options: def
                .options
                .iter()
                .map(|option| {
                    let selected = FilterValue::exact(*option);
                    FacetOption {
                        value: *option,
                        count: catalog
                            .iter()
                            .filter(|item| def.matches(item, &selected))
                            .count(),
                    }
                })
                .collect(),
        })
        .collect()
}
