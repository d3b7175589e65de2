//! Marketplace produce listed by member farms.

use std::cmp::Ordering;

use super::{descending, descending_f64};
use crate::filter::{
    at_least, exact_eq, flag_set, in_range, tags_intersect, FilterDef, FilterKind, FilterValue,
};
use crate::model::{CatalogKind, Product};
use crate::schema::{CatalogSchema, Listable, SearchField, SortContext, SortDef, SortKey};

pub const CATEGORIES: &[&str] = &[
    "Légumes",
    "Fruits",
    "Céréales",
    "Produits laitiers",
    "Miel",
    "Semences",
    "Transformés",
];

pub const LOCATIONS: &[&str] = &["Dakar", "Thiès", "Kaolack", "Saint-Louis", "Ziguinchor"];

fn category(p: &Product, v: &FilterValue) -> bool {
    exact_eq(&p.category, v)
}

fn location(p: &Product, v: &FilterValue) -> bool {
    exact_eq(&p.location, v)
}

fn price(p: &Product, v: &FilterValue) -> bool {
    in_range(p.price, v)
}

fn rating(p: &Product, v: &FilterValue) -> bool {
    at_least(p.rating, v)
}

fn in_stock(p: &Product, v: &FilterValue) -> bool {
    flag_set(p.in_stock, v)
}

fn organic(p: &Product, v: &FilterValue) -> bool {
    flag_set(p.organic, v)
}

fn tags(p: &Product, v: &FilterValue) -> bool {
    tags_intersect(&p.tags, v)
}

fn by_recent(a: &Product, b: &Product, _: &SortContext) -> Ordering {
    descending(a.listed_at, b.listed_at)
}

fn by_popular(a: &Product, b: &Product, _: &SortContext) -> Ordering {
    descending(a.sales, b.sales)
}

fn by_trending(a: &Product, b: &Product, ctx: &SortContext) -> Ordering {
    descending_f64(
        ctx.trending_score(a.sales as f64, a.listed_at),
        ctx.trending_score(b.sales as f64, b.listed_at),
    )
}

fn by_price_asc(a: &Product, b: &Product, _: &SortContext) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_desc(a: &Product, b: &Product, _: &SortContext) -> Ordering {
    descending_f64(a.price, b.price)
}

fn by_rating(a: &Product, b: &Product, _: &SortContext) -> Ordering {
    descending_f64(a.rating, b.rating)
}

fn name(p: &Product) -> &str {
    &p.name
}

fn description(p: &Product) -> &str {
    &p.description
}

fn producer(p: &Product) -> &str {
    &p.producer
}

pub static SCHEMA: CatalogSchema<Product> = CatalogSchema {
    kind: CatalogKind::Products,
    filters: &[
        FilterDef::new("category", "Category", FilterKind::Exact, category).options(CATEGORIES),
        FilterDef::new("location", "Location", FilterKind::Exact, location).options(LOCATIONS),
        FilterDef::new("price", "Price range", FilterKind::Range, price),
        FilterDef::new("rating", "Minimum rating", FilterKind::Threshold, rating),
        FilterDef::new("in_stock", "In stock", FilterKind::Flag, in_stock),
        FilterDef::new("organic", "Organic", FilterKind::Flag, organic),
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
    search_fields: &[name as SearchField<Product>, description, producer],
    default_sort: SortKey::Popular,
};

impl Listable for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn schema() -> &'static CatalogSchema<Self> {
        &SCHEMA
    }
}
