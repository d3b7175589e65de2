//! # Commands
//!
//! One module per user-facing operation. Commands take loaded catalogs and
//! plain arguments and return a [`CmdResult`]; they never print. Problems the
//! user should see but that do not abort the command (an unknown filter key,
//! a page past the end) travel as [`CmdMessage`]s.

use serde::Serialize;

use crate::config::AgrocatConfig;
use crate::model::{CatalogKind, Course, NewsItem, Product, Program, ViewMode};
use crate::pipeline::Facet;
use crate::schema::{Listable, SortKey};

pub mod config;
pub mod facets;
pub mod list;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record of any catalog, for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Program(Program),
    Course(Course),
    Product(Product),
    News(NewsItem),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Program(p) => p.id(),
            Record::Course(c) => c.id(),
            Record::Product(p) => p.id(),
            Record::News(n) => n.id(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Program(p) => Listable::title(p),
            Record::Course(c) => Listable::title(c),
            Record::Product(p) => Listable::title(p),
            Record::News(n) => Listable::title(n),
        }
    }
}

impl From<&Program> for Record {
    fn from(p: &Program) -> Self {
        Record::Program(p.clone())
    }
}

impl From<&Course> for Record {
    fn from(c: &Course) -> Self {
        Record::Course(c.clone())
    }
}

impl From<&Product> for Record {
    fn from(p: &Product) -> Self {
        Record::Product(p.clone())
    }
}

impl From<&NewsItem> for Record {
    fn from(n: &NewsItem) -> Self {
        Record::News(n.clone())
    }
}

/// One computed page of a listing, with the state that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    pub kind: CatalogKind,
    pub items: Vec<Record>,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub active_filter_count: usize,
    pub catalog_size: usize,
    pub is_empty: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub sort: SortKey,
    pub view: ViewMode,
    pub search: String,
    /// Sort and view a fresh `list` would use, for building clear-all hints.
    pub default_sort: SortKey,
    pub default_view: ViewMode,
}

/// The filters and sorts a catalog offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFacets {
    pub kind: CatalogKind,
    pub catalog_size: usize,
    pub filters: Vec<Facet>,
    pub sorts: Vec<SortKey>,
    pub default_sort: SortKey,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Option<ListingPage>,
    pub item: Option<Record>,
    pub facets: Option<CatalogFacets>,
    pub config: Option<AgrocatConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: ListingPage) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_item(mut self, item: Record) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_facets(mut self, facets: CatalogFacets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_config(mut self, config: AgrocatConfig) -> Self {
        self.config = Some(config);
        self
    }
}
