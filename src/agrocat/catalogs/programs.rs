//! Training programs: multi-week, in-person sessions run by the cooperative.

use std::cmp::Ordering;

use super::{
    descending, descending_f64, duration_tier, price_tier, DurationTier, DURATION_TIERS, LEVELS,
    PRICE_TIERS,
};
use crate::filter::{
    at_least, exact_eq, flag_set, tags_intersect, FilterDef, FilterKind, FilterValue,
};
use crate::model::{CatalogKind, Program};
use crate::schema::{CatalogSchema, Listable, SearchField, SortContext, SortDef, SortKey};

pub const CATEGORIES: &[&str] = &[
    "Maraîchage",
    "Élevage",
    "Agroécologie",
    "Apiculture",
    "Transformation",
    "Gestion",
];

pub const LOCATIONS: &[&str] = &["Dakar", "Thiès", "Kaolack", "Saint-Louis", "Ziguinchor"];

fn category(p: &Program, v: &FilterValue) -> bool {
    exact_eq(&p.category, v)
}

fn level(p: &Program, v: &FilterValue) -> bool {
    exact_eq(&p.level, v)
}

fn duration(p: &Program, v: &FilterValue) -> bool {
    let tier = match p.duration_weeks {
        0..=4 => DurationTier::Short,
        5..=12 => DurationTier::Medium,
        _ => DurationTier::Long,
    };
    duration_tier(tier, v)
}

fn location(p: &Program, v: &FilterValue) -> bool {
    exact_eq(&p.location, v)
}

fn price(p: &Program, v: &FilterValue) -> bool {
    price_tier(p.price, v)
}

fn rating(p: &Program, v: &FilterValue) -> bool {
    at_least(p.rating, v)
}

fn certified(p: &Program, v: &FilterValue) -> bool {
    flag_set(p.certified, v)
}

fn tags(p: &Program, v: &FilterValue) -> bool {
    tags_intersect(&p.tags, v)
}

fn by_recent(a: &Program, b: &Program, _: &SortContext) -> Ordering {
    descending(a.start_date, b.start_date)
}

fn by_popular(a: &Program, b: &Program, _: &SortContext) -> Ordering {
    descending(a.enrolled, b.enrolled)
}

fn by_trending(a: &Program, b: &Program, ctx: &SortContext) -> Ordering {
    descending_f64(
        ctx.trending_score(a.enrolled as f64, a.start_date),
        ctx.trending_score(b.enrolled as f64, b.start_date),
    )
}

fn by_price_asc(a: &Program, b: &Program, _: &SortContext) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_desc(a: &Program, b: &Program, _: &SortContext) -> Ordering {
    descending_f64(a.price, b.price)
}

fn by_rating(a: &Program, b: &Program, _: &SortContext) -> Ordering {
    descending_f64(a.rating, b.rating)
}

fn title(p: &Program) -> &str {
    &p.title
}

fn description(p: &Program) -> &str {
    &p.description
}

fn location_text(p: &Program) -> &str {
    &p.location
}

pub static SCHEMA: CatalogSchema<Program> = CatalogSchema {
    kind: CatalogKind::Programs,
    filters: &[
        FilterDef::new("category", "Category", FilterKind::Exact, category).options(CATEGORIES),
        FilterDef::new("level", "Level", FilterKind::Exact, level).options(LEVELS),
        FilterDef::new("duration", "Duration", FilterKind::Exact, duration)
            .options(DURATION_TIERS),
        FilterDef::new("location", "Location", FilterKind::Exact, location).options(LOCATIONS),
        FilterDef::new("price", "Price", FilterKind::Exact, price).options(PRICE_TIERS),
        FilterDef::new("rating", "Minimum rating", FilterKind::Threshold, rating),
        FilterDef::new("certified", "Certifying", FilterKind::Flag, certified),
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
    search_fields: &[title as SearchField<Program>, description, location_text],
    default_sort: SortKey::Recent,
};

impl Listable for Program {
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
