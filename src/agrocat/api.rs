//! # API Facade
//!
//! The single entry point for every agrocat operation. The API:
//! - **Loads** catalogs from its [`CatalogSource`] on first use
//! - **Dispatches** to the matching command
//! - **Returns** structured `Result<CmdResult>` values, never text
//!
//! `CatalogApi<S: CatalogSource>` is generic over where the data comes from:
//! `DirSource` or `EmbeddedSource` in production, `InMemorySource` in tests.
//!
//! Config actions never touch the source, so a broken data directory or an
//! out-of-range setting can still be repaired through [`CatalogApi::config_action`].
//!
//! Date-dependent operations take a [`SortContext`] so callers decide what
//! "today" means.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use crate::commands::{self, CmdResult};
use crate::config::AgrocatConfig;
use crate::error::Result;
use crate::model::CatalogKind;
use crate::schema::SortContext;
use crate::store::{CatalogSource, Catalogs};

pub struct CatalogApi<S: CatalogSource> {
    source: S,
    catalogs: OnceCell<Catalogs>,
    config: AgrocatConfig,
    config_dir: PathBuf,
}

impl<S: CatalogSource> CatalogApi<S> {
    pub fn new(source: S, config: AgrocatConfig, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            catalogs: OnceCell::new(),
            config,
            config_dir: config_dir.into(),
        }
    }

    /// The loaded catalogs. The first call reads the source and fails on
    /// unreadable or invalid data.
    pub fn catalogs(&self) -> Result<&Catalogs> {
        self.catalogs.get_or_try_init(|| self.source.load())
    }

    pub fn config(&self) -> &AgrocatConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn list(
        &self,
        kind: CatalogKind,
        query: &commands::list::ListQuery,
        ctx: &SortContext,
    ) -> Result<CmdResult> {
        commands::list::run(self.catalogs()?, &self.config, kind, query, ctx)
    }

    pub fn show(&self, kind: CatalogKind, id: &str) -> Result<CmdResult> {
        commands::show::run(self.catalogs()?, kind, id)
    }

    pub fn facets(&self, kind: CatalogKind) -> Result<CmdResult> {
        Ok(commands::facets::run(self.catalogs()?, kind))
    }

    /// Config changes are written to disk and also applied to this API.
    pub fn config_action(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}
