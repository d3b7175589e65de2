use crate::commands::{CmdResult, Record};
use crate::error::{CatalogError, Result};
use crate::model::CatalogKind;
use crate::schema::Listable;
use crate::store::Catalogs;

pub fn run(catalogs: &Catalogs, kind: CatalogKind, id: &str) -> Result<CmdResult> {
    let record = match kind {
        CatalogKind::Programs => find(&catalogs.programs, id),
        CatalogKind::Courses => find(&catalogs.courses, id),
        CatalogKind::Products => find(&catalogs.products, id),
        CatalogKind::News => find(&catalogs.news, id),
    };

    record
        .map(|item| CmdResult::default().with_item(item))
        .ok_or_else(|| CatalogError::ItemNotFound {
            kind,
            id: id.to_string(),
        })
}

fn find<T>(catalog: &[T], id: &str) -> Option<Record>
where
    T: Listable,
    Record: for<'r> From<&'r T>,
{
    let id = id.trim();
    catalog.iter().find(|item| item.id() == id).map(Record::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{course_catalog, product};

    fn catalogs() -> Catalogs {
        Catalogs {
            courses: course_catalog(),
            products: vec![product("m1", "Miel de mangrove")],
            ..Default::default()
        }
    }

    #[test]
    fn finds_by_id() {
        let result = run(&catalogs(), CatalogKind::Courses, "c03").unwrap();
        let item = result.item.unwrap();
        assert_eq!(item.title(), "Entrepreneuriat Agricole");
        assert!(matches!(item, Record::Course(_)));
    }

    #[test]
    fn product_title_is_its_name() {
        let result = run(&catalogs(), CatalogKind::Products, " m1 ").unwrap();
        assert_eq!(result.item.unwrap().title(), "Miel de mangrove");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = run(&catalogs(), CatalogKind::News, "c03").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ItemNotFound { kind: CatalogKind::News, ref id } if id == "c03"
        ));
    }
}
