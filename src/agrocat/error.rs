use crate::model::CatalogKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown catalog: {0} (expected programs, courses, products or news)")]
    UnknownCatalog(String),

    #[error("No item with id \"{id}\" in {kind}")]
    ItemNotFound { kind: CatalogKind, id: String },

    #[error("Duplicate id \"{id}\" in {kind} catalog")]
    DuplicateId { kind: CatalogKind, id: String },

    #[error("Invalid filter \"{key}\": {reason}")]
    InvalidFilter { key: String, reason: String },

    #[error("Unknown sort: {0} (expected recent, popular, trending, price-asc, price-desc or rating)")]
    UnknownSort(String),

    #[error("Sort \"{sort}\" is not available for {kind}")]
    UnsupportedSort { kind: CatalogKind, sort: String },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
