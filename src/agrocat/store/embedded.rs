use super::{log_loaded, parse_catalog, CatalogSource, Catalogs};
use crate::error::Result;
use crate::model::CatalogKind;

const PROGRAMS: &str = include_str!("../../../data/programs.json");
const COURSES: &str = include_str!("../../../data/courses.json");
const PRODUCTS: &str = include_str!("../../../data/products.json");
const NEWS: &str = include_str!("../../../data/news.json");

/// The mock catalogs shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }

    /// Raw JSON of one embedded catalog.
    pub fn raw(kind: CatalogKind) -> &'static str {
        match kind {
            CatalogKind::Programs => PROGRAMS,
            CatalogKind::Courses => COURSES,
            CatalogKind::Products => PRODUCTS,
            CatalogKind::News => NEWS,
        }
    }
}

impl CatalogSource for EmbeddedSource {
    fn load(&self) -> Result<Catalogs> {
        let catalogs = Catalogs {
            programs: parse_catalog(PROGRAMS)?,
            courses: parse_catalog(COURSES)?,
            products: parse_catalog(PRODUCTS)?,
            news: parse_catalog(NEWS)?,
        };
        catalogs.validate()?;
        log_loaded(&catalogs, "embedded");
        Ok(catalogs)
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}
