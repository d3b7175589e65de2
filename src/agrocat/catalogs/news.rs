//! News articles. No price or rating, so only date and audience sorts apply.

use std::cmp::Ordering;

use super::{descending, descending_f64};
use crate::filter::{exact_eq, flag_set, tags_intersect, FilterDef, FilterKind, FilterValue};
use crate::model::{CatalogKind, NewsItem};
use crate::schema::{CatalogSchema, Listable, SearchField, SortContext, SortDef, SortKey};

pub const CATEGORIES: &[&str] = &[
    "Formation",
    "Marché",
    "Coopérative",
    "Innovation",
    "Événement",
];

fn category(n: &NewsItem, v: &FilterValue) -> bool {
    exact_eq(&n.category, v)
}

fn featured(n: &NewsItem, v: &FilterValue) -> bool {
    flag_set(n.featured, v)
}

fn tags(n: &NewsItem, v: &FilterValue) -> bool {
    tags_intersect(&n.tags, v)
}

fn by_recent(a: &NewsItem, b: &NewsItem, _: &SortContext) -> Ordering {
    descending(a.published_at, b.published_at)
}

fn by_popular(a: &NewsItem, b: &NewsItem, _: &SortContext) -> Ordering {
    descending(a.views, b.views)
}

fn by_trending(a: &NewsItem, b: &NewsItem, ctx: &SortContext) -> Ordering {
    descending_f64(
        ctx.trending_score(a.views as f64, a.published_at),
        ctx.trending_score(b.views as f64, b.published_at),
    )
}

fn title(n: &NewsItem) -> &str {
    &n.title
}

fn excerpt(n: &NewsItem) -> &str {
    &n.excerpt
}

pub static SCHEMA: CatalogSchema<NewsItem> = CatalogSchema {
    kind: CatalogKind::News,
    filters: &[
        FilterDef::new("category", "Category", FilterKind::Exact, category).options(CATEGORIES),
        FilterDef::new("featured", "Featured", FilterKind::Flag, featured),
        FilterDef::new("tags", "Tags", FilterKind::Tags, tags),
    ],
    sorts: &[
        SortDef::new(SortKey::Recent, by_recent),
        SortDef::new(SortKey::Popular, by_popular),
        SortDef::new(SortKey::Trending, by_trending),
    ],
    search_fields: &[title as SearchField<NewsItem>, excerpt],
    default_sort: SortKey::Recent,
};

impl Listable for NewsItem {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::news_item;

    #[test]
    fn no_price_or_rating_sorts() {
        assert!(!SCHEMA.supports_sort(SortKey::PriceAsc));
        assert!(!SCHEMA.supports_sort(SortKey::PriceDesc));
        assert!(!SCHEMA.supports_sort(SortKey::Rating));
        assert!(SCHEMA.supports_sort(SortKey::Trending));
    }

    #[test]
    fn search_covers_excerpt_but_not_author() {
        let mut n = news_item("n1", "Ouverture des inscriptions");
        n.excerpt = "La session de maraîchage démarre en mars.".into();
        n.author = "Moussa Diop".into();
        assert!(SCHEMA.matches_search(&n, "maraîchage"));
        assert!(!SCHEMA.matches_search(&n, "diop"));
    }
}
