//! # Agrocat Architecture
//!
//! Agrocat browses the catalogs of an agricultural training cooperative:
//! training programs, e-learning courses, marketplace produce and news. Every
//! listing view does the same three things (filter, sort, paginate), so the
//! core is **one generic pipeline** configured per catalog by a static schema.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, sets exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Commands (commands/*.rs)              │
//! │  - Turns raw user input into listing actions                │
//! │  - Returns CmdResult values                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Listing Core (listing.rs, pipeline.rs)                     │
//! │  - State reducer and pure filter / sort / paginate stages   │
//! │  - Parameterized by CatalogSchema (schema.rs, catalogs/)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (store/)                                           │
//! │  - Read-only CatalogSource trait                            │
//! │  - Embedded data, JSON directory, in-memory (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Schema Registry
//!
//! A catalog plugs into the pipeline by declaring a [`schema::CatalogSchema`]:
//! its filter keys with their predicates, its sort keys with their
//! comparators, and the text fields the search box looks at. Adding a filter
//! to a view means adding one line to its schema; the pipeline never changes.
//!
//! ## Key Principle: Nothing Fails in the Core
//!
//! Pipeline stages are total. Unknown filter keys and values of the wrong
//! kind are ignored, out-of-range pages come back empty, and an empty result
//! is a value with its own rendering. Errors only exist at the edges: reading
//! data, reading config, and parsing what the user typed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `list`, `show`, `filters` (facets) and `config`
//! - [`listing`]: Listing state, actions and the reducer
//! - [`pipeline`]: `apply_filters`, `apply_sort`, `paginate`, facet counts
//! - [`schema`]: Sort keys, schemas and the [`schema::Listable`] trait
//! - [`filter`]: Filter values, filter state and predicate helpers
//! - [`catalogs`]: The four concrete schemas
//! - [`model`]: Record types and catalog kinds
//! - [`store`]: Catalog sources
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalogs;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod listing;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
