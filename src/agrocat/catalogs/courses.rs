//! E-learning courses from the online portal.

use std::cmp::Ordering;

use super::{
    descending, descending_f64, duration_tier, price_tier, DurationTier, DURATION_TIERS, LEVELS,
    PRICE_TIERS,
};
use crate::filter::{
    at_least, exact_eq, flag_set, tags_intersect, FilterDef, FilterKind, FilterValue,
};
use crate::model::{CatalogKind, Course};
use crate::schema::{CatalogSchema, Listable, SearchField, SortContext, SortDef, SortKey};

pub const CATEGORIES: &[&str] = &[
    "Production végétale",
    "Élevage",
    "Agroécologie",
    "Gestion d'exploitation",
    "Transformation",
    "Numérique agricole",
];

fn category(c: &Course, v: &FilterValue) -> bool {
    exact_eq(&c.category, v)
}

fn level(c: &Course, v: &FilterValue) -> bool {
    exact_eq(&c.level, v)
}

fn duration(c: &Course, v: &FilterValue) -> bool {
    let tier = if c.duration_hours < 5.0 {
        DurationTier::Short
    } else if c.duration_hours <= 20.0 {
        DurationTier::Medium
    } else {
        DurationTier::Long
    };
    duration_tier(tier, v)
}

fn price(c: &Course, v: &FilterValue) -> bool {
    price_tier(c.price, v)
}

fn rating(c: &Course, v: &FilterValue) -> bool {
    at_least(c.rating, v)
}

fn certificate(c: &Course, v: &FilterValue) -> bool {
    flag_set(c.has_certificate, v)
}

fn tags(c: &Course, v: &FilterValue) -> bool {
    tags_intersect(&c.tags, v)
}

fn by_recent(a: &Course, b: &Course, _: &SortContext) -> Ordering {
    descending(a.published_at, b.published_at)
}

fn by_popular(a: &Course, b: &Course, _: &SortContext) -> Ordering {
    descending(a.enrolled_students, b.enrolled_students)
}

fn by_trending(a: &Course, b: &Course, ctx: &SortContext) -> Ordering {
    descending_f64(
        ctx.trending_score(a.enrolled_students as f64, a.published_at),
        ctx.trending_score(b.enrolled_students as f64, b.published_at),
    )
}

fn by_price_asc(a: &Course, b: &Course, _: &SortContext) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_desc(a: &Course, b: &Course, _: &SortContext) -> Ordering {
    descending_f64(a.price, b.price)
}

fn by_rating(a: &Course, b: &Course, _: &SortContext) -> Ordering {
    descending_f64(a.rating, b.rating)
}

fn title(c: &Course) -> &str {
    &c.title
}

fn description(c: &Course) -> &str {
    &c.description
}

fn instructor(c: &Course) -> &str {
    &c.instructor
}

pub static SCHEMA: CatalogSchema<Course> = CatalogSchema {
    kind: CatalogKind::Courses,
    filters: &[
        FilterDef::new("category", "Category", FilterKind::Exact, category).options(CATEGORIES),
        FilterDef::new("level", "Level", FilterKind::Exact, level).options(LEVELS),
        FilterDef::new("duration", "Duration", FilterKind::Exact, duration)
            .options(DURATION_TIERS),
        FilterDef::new("price", "Price", FilterKind::Exact, price).options(PRICE_TIERS),
        FilterDef::new("rating", "Minimum rating", FilterKind::Threshold, rating),
        FilterDef::new("certificate", "With certificate", FilterKind::Flag, certificate),
        FilterDef::new("tags", "Tags", FilterKind::Tags, tags),
    ],
    sorts: &[
        SortDef::new(SortKey::Recent, by_recent),
        SortDef::new(SortKey::Popular, by_popular),
        SortDef::new(SortKey::Trending, by_trending),
        SortDef::new(SortKey::PriceAsc, by_price_asc),
        SortDef::new(SortKey::PriceDesc, by_price_desc),
        SortDef::new(SortKey::Rating, by_rating),
    ],
    search_fields: &[title as SearchField<Course>, description, instructor],
    default_sort: SortKey::Popular,
};

impl Listable for Course {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn schema() -> &'static CatalogSchema<Self> {
        &SCHEMA
    }
}
