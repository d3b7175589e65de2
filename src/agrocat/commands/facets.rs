use crate::commands::{CatalogFacets, CmdResult};
use crate::model::CatalogKind;
use crate::pipeline::facet_counts;
use crate::schema::Listable;
use crate::store::Catalogs;

pub fn run(catalogs: &Catalogs, kind: CatalogKind) -> CmdResult {
    let facets = match kind {
        CatalogKind::Programs => describe(&catalogs.programs),
        CatalogKind::Courses => describe(&catalogs.courses),
        CatalogKind::Products => describe(&catalogs.products),
        CatalogKind::News => describe(&catalogs.news),
    };
    CmdResult::default().with_facets(facets)
}

fn describe<T: Listable>(catalog: &[T]) -> CatalogFacets {
    let schema = T::schema();
    CatalogFacets {
        kind: schema.kind,
        catalog_size: catalog.len(),
        filters: facet_counts(catalog, schema),
        sorts: schema.sort_keys().collect(),
        default_sort: schema.default_sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SortKey;
    use crate::test_utils::{course_catalog, news_item};

    #[test]
    fn lists_filters_and_sorts() {
        let catalogs = Catalogs {
            courses: course_catalog(),
            ..Default::default()
        };
        let facets = run(&catalogs, CatalogKind::Courses).facets.unwrap();

        assert_eq!(facets.catalog_size, 12);
        let keys: Vec<_> = facets.filters.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec!["category", "level", "duration", "price", "rating", "certificate", "tags"]
        );
        assert_eq!(facets.sorts.len(), SortKey::ALL.len());
    }

    #[test]
    fn news_offers_three_sorts() {
        let catalogs = Catalogs {
            news: vec![news_item("n1", "A")],
            ..Default::default()
        };
        let facets = run(&catalogs, CatalogKind::News).facets.unwrap();
        assert_eq!(
            facets.sorts,
            vec![SortKey::Recent, SortKey::Popular, SortKey::Trending]
        );
        assert_eq!(facets.default_sort, SortKey::Recent);
    }
}
