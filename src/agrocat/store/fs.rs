use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::{log_loaded, parse_catalog, CatalogSource, Catalogs, EmbeddedSource};
use crate::error::Result;
use crate::model::CatalogKind;

/// Reads catalogs from JSON files in a directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_one<T: DeserializeOwned>(&self, kind: CatalogKind) -> Result<Vec<T>> {
        let path = self.root.join(kind.file_name());
        if !path.exists() {
            tracing::debug!(path = %path.display(), "catalog file missing, using embedded data");
            return parse_catalog(EmbeddedSource::raw(kind));
        }
        let json = fs::read_to_string(&path)?;
        parse_catalog(&json)
    }
}

impl CatalogSource for DirSource {
    fn load(&self) -> Result<Catalogs> {
        let catalogs = Catalogs {
            programs: self.load_one(CatalogKind::Programs)?,
            courses: self.load_one(CatalogKind::Courses)?,
            products: self.load_one(CatalogKind::Products)?,
            news: self.load_one(CatalogKind::News)?,
        };
        catalogs.validate()?;
        log_loaded(&catalogs, &self.describe());
        Ok(catalogs)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
