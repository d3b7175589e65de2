//! Catalog schemas: the per-domain half of the listing pipeline.
//!
//! The generic engine in [`crate::pipeline`] knows nothing about programs,
//! courses, products or news. Each catalog instead supplies a
//! [`CatalogSchema`] describing:
//!
//! - which filter keys exist and how each one tests an item ([`FilterDef`])
//! - which sort orders are offered and how items compare ([`SortDef`])
//! - which text fields free-text search looks at
//!
//! Adding a filter to a listing means adding one entry to its schema.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::error::CatalogError;
use crate::filter::{FilterDef, FilterState, FilterValue};
use crate::model::CatalogKind;

/// Sort orders offered by the listing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first.
    Recent,
    /// Highest engagement count first.
    Popular,
    /// Highest `popularity / (1 + age in days)` first.
    Trending,
    PriceAsc,
    PriceDesc,
    /// Best rated first.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Recent,
        SortKey::Popular,
        SortKey::Trending,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::Trending => "trending",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownSort(s.trim().to_string()))
    }
}

/// Evaluation-time inputs for comparators.
///
/// `trending` depends on the current date, so the same filtered set sorted on
/// two different days can come out in a different order. Callers that need a
/// reproducible order pass a fixed `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortContext {
    pub today: NaiveDate,
}

impl SortContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context for the current wall-clock date.
    pub fn now() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// Whole days elapsed since `date`. Future dates count as 0.
    pub fn age_in_days(&self, date: NaiveDate) -> i64 {
        (self.today - date).num_days().max(0)
    }

    /// `popularity / (1 + age in days)`.
    pub fn trending_score(&self, popularity: f64, date: NaiveDate) -> f64 {
        popularity / (1.0 + self.age_in_days(date) as f64)
    }
}

/// Ordering between two items under one sort key.
pub type Comparator<T> = fn(&T, &T, &SortContext) -> Ordering;

/// Declaration of one sort order for a catalog of `T`.
pub struct SortDef<T: 'static> {
    pub key: SortKey,
    compare: Comparator<T>,
}

impl<T: 'static> SortDef<T> {
    pub const fn new(key: SortKey, compare: Comparator<T>) -> Self {
        Self { key, compare }
    }

    pub fn compare(&self, a: &T, b: &T, ctx: &SortContext) -> Ordering {
        (self.compare)(a, b, ctx)
    }
}

/// Accessor for one free-text field searched by the listing's search box.
pub type SearchField<T> = fn(&T) -> &str;

/// The strategy object tying a catalog type to the generic pipeline.
pub struct CatalogSchema<T: 'static> {
    pub kind: CatalogKind,
    pub filters: &'static [FilterDef<T>],
    pub sorts: &'static [SortDef<T>],
    pub search_fields: &'static [SearchField<T>],
    pub default_sort: SortKey,
}

impl<T: 'static> CatalogSchema<T> {
    /// Look up a filter definition by key.
    pub fn filter(&self, key: &str) -> Option<&FilterDef<T>> {
        self.filters.iter().find(|def| def.key == key)
    }

    /// Look up a sort definition by key.
    pub fn sort(&self, key: SortKey) -> Option<&SortDef<T>> {
        self.sorts.iter().find(|def| def.key == key)
    }

    pub fn supports_sort(&self, key: SortKey) -> bool {
        self.sort(key).is_some()
    }

    pub fn filter_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().map(|def| def.key)
    }

    pub fn sort_keys(&self) -> impl Iterator<Item = SortKey> + '_ {
        self.sorts.iter().map(|def| def.key)
    }

    /// The (definition, value) pairs of `state` that actually constrain items.
    ///
    /// Keys without a definition and values that are inactive or of the
    /// wrong kind are skipped.
    pub fn effective_filters<'s>(
        &'s self,
        state: &'s FilterState,
    ) -> impl Iterator<Item = (&'s FilterDef<T>, &'s FilterValue)> + 's {
        state.iter().filter_map(move |(key, value)| {
            let Some(def) = self.filter(key) else {
                tracing::debug!(catalog = %self.kind, key, "ignoring unknown filter key");
                return None;
            };
            if value.is_active() && !def.is_effective(value) {
                tracing::debug!(
                    catalog = %self.kind,
                    key,
                    expected = ?def.kind,
                    "ignoring filter value of the wrong kind"
                );
            }
            def.is_effective(value).then_some((def, value))
        })
    }

    /// Whether any search field contains `needle`, which must already be
    /// trimmed and lowercased.
    pub fn matches_search(&self, item: &T, needle: &str) -> bool {
        self.search_fields
            .iter()
            .any(|field| field(item).to_lowercase().contains(needle))
    }
}

/// A record type that can be browsed through the listing pipeline.
pub trait Listable: Sized + 'static {
    fn id(&self) -> &str;

    /// Display title (a product's name, an article's headline, ...).
    fn title(&self) -> &str;

    fn schema() -> &'static CatalogSchema<Self>;
}
