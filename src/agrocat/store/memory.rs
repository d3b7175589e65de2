use super::{CatalogSource, Catalogs};
use crate::error::Result;

/// In-memory catalogs for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    catalogs: Catalogs,
}

impl InMemorySource {
    pub fn new(catalogs: Catalogs) -> Self {
        Self { catalogs }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Catalogs> {
        self.catalogs.validate()?;
        Ok(self.catalogs.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
