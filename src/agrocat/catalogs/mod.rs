//! # Catalog Schemas
//!
//! One module per listing view. Each module declares the static
//! [`CatalogSchema`](crate::schema::CatalogSchema) for its record type and
//! implements [`Listable`](crate::schema::Listable) so the generic pipeline can
//! find it.
//!
//! | Catalog | Filters | Sorts |
//! |---------|---------|-------|
//! | programs | category, level, duration, location, price, rating, certified, tags | all |
//! | courses | category, level, duration, price, rating, certificate, tags | all |
//! | products | category, location, price (range), rating, in_stock, organic, tags | all |
//! | news | category, featured, tags | recent, popular, trending |
//!
//! The helpers below are the predicates and comparators shared by more than
//! one catalog.

use std::cmp::Ordering;

use crate::filter::FilterValue;

pub mod courses;
pub mod news;
pub mod products;
pub mod programs;

/// Options of the `price` tier filter.
pub const PRICE_TIERS: &[&str] = &["free", "paid"];

/// Options of the `duration` tier filter.
pub const DURATION_TIERS: &[&str] = &["short", "medium", "long"];

/// Options of the `level` filter.
pub const LEVELS: &[&str] = &["Débutant", "Intermédiaire", "Avancé"];

/// Free (`price == 0`) or paid (`price > 0`). Unknown tiers match nothing.
pub(crate) fn price_tier(price: f64, value: &FilterValue) -> bool {
    let FilterValue::Exact(tier) = value else {
        return true;
    };
    match tier.trim().to_lowercase().as_str() {
        "free" | "gratuit" => price == 0.0,
        "paid" | "payant" => price > 0.0,
        _ => false,
    }
}

/// Length bucket used by the `duration` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationTier {
    Short,
    Medium,
    Long,
}

impl DurationTier {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "short" | "court" => Some(DurationTier::Short),
            "medium" | "moyen" => Some(DurationTier::Medium),
            "long" => Some(DurationTier::Long),
            _ => None,
        }
    }
}

/// Whether an item in bucket `tier` passes the duration filter. Unknown tiers
/// match nothing.
pub(crate) fn duration_tier(tier: DurationTier, value: &FilterValue) -> bool {
    let FilterValue::Exact(wanted) = value else {
        return true;
    };
    DurationTier::parse(wanted) == Some(tier)
}

/// Larger first.
pub(crate) fn descending<K: Ord>(a: K, b: K) -> Ordering {
    b.cmp(&a)
}

/// Larger first, for floating point keys.
pub(crate) fn descending_f64(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
