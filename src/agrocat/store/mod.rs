//! # Catalog Sources
//!
//! Catalogs are read-only snapshots. A [`CatalogSource`] produces all four of
//! them at once; nothing downstream ever writes back.
//!
//! ## Implementations
//!
//! - [`embedded::EmbeddedSource`]: the mock data compiled into the binary
//!   (`data/*.json`). Used when no data directory is configured.
//! - [`fs::DirSource`]: reads `programs.json`, `courses.json`, `products.json`
//!   and `news.json` from a directory. A missing file falls back to the
//!   embedded copy of that catalog.
//! - [`memory::InMemorySource`]: hands out catalogs built in code. For tests.
//!
//! ## File Format
//!
//! Each file is a JSON array of records in catalog order:
//!
//! ```text
//! data/
//! ├── programs.json   # [Program, ...]
//! ├── courses.json    # [Course, ...]
//! ├── products.json   # [Product, ...]
//! └── news.json       # [NewsItem, ...]
//! ```
//!
//! Catalog order is the order in the file. Ids must be unique within a
//! catalog; [`Catalogs::validate`] rejects duplicates at load time.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::model::{CatalogKind, Course, NewsItem, Product, Program};
use crate::schema::Listable;

pub mod embedded;
pub mod fs;
pub mod memory;

pub use embedded::EmbeddedSource;
pub use fs::DirSource;
pub use memory::InMemorySource;

/// Abstract interface for loading catalogs.
pub trait CatalogSource {
    /// Load every catalog. Implementations call [`Catalogs::validate`].
    fn load(&self) -> Result<Catalogs>;

    /// Human readable origin, for logs and `config` output.
    fn describe(&self) -> String;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load(&self) -> Result<Catalogs> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The four catalogs, each in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    pub programs: Vec<Program>,
    pub courses: Vec<Course>,
    pub products: Vec<Product>,
    pub news: Vec<NewsItem>,
}

impl Catalogs {
    pub fn len(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Programs => self.programs.len(),
            CatalogKind::Courses => self.courses.len(),
            CatalogKind::Products => self.products.len(),
            CatalogKind::News => self.news.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        CatalogKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }

    /// Rejects catalogs that reuse an id.
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids(&self.programs)?;
        ensure_unique_ids(&self.courses)?;
        ensure_unique_ids(&self.products)?;
        ensure_unique_ids(&self.news)?;
        Ok(())
    }
}

fn ensure_unique_ids<T: Listable>(items: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(CatalogError::DuplicateId {
                kind: T::schema().kind,
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Parses one catalog file.
pub(crate) fn parse_catalog<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Logs how many records were loaded from where.
pub(crate) fn log_loaded(catalogs: &Catalogs, origin: &str) {
    tracing::info!(
        origin,
        programs = catalogs.programs.len(),
        courses = catalogs.courses.len(),
        products = catalogs.products.len(),
        news = catalogs.news.len(),
        "catalogs loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{course, news_item};

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalogs = Catalogs {
            courses: vec![course("c1", "A"), course("c2", "B"), course("c1", "C")],
            ..Default::default()
        };
        let err = catalogs.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { kind: CatalogKind::Courses, ref id } if id == "c1"
        ));
    }

    #[test]
    fn same_id_in_different_catalogs_is_fine() {
        let catalogs = Catalogs {
            courses: vec![course("x1", "A")],
            news: vec![news_item("x1", "B")],
            ..Default::default()
        };
        assert!(catalogs.validate().is_ok());
    }

    #[test]
    fn len_and_is_empty() {
        let mut catalogs = Catalogs::default();
        assert!(catalogs.is_empty());
        catalogs.news.push(news_item("n1", "A"));
        assert!(!catalogs.is_empty());
        assert_eq!(catalogs.len(CatalogKind::News), 1);
        assert_eq!(catalogs.len(CatalogKind::Courses), 0);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_catalog::<Program>("[{\"id\": 3}]").unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
