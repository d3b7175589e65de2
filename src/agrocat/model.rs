//! Catalog records.
//!
//! The four listing views of the cooperative site each browse one of these
//! record types. They are plain data: loaded once by a [`crate::store::CatalogSource`]
//! and only ever read afterwards.

use crate::error::CatalogError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which catalog a listing operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Programs,
    Courses,
    Products,
    News,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Programs,
        CatalogKind::Courses,
        CatalogKind::Products,
        CatalogKind::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Programs => "programs",
            CatalogKind::Courses => "courses",
            CatalogKind::Products => "products",
            CatalogKind::News => "news",
        }
    }

    /// File name used by directory-backed sources.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "programs" | "program" => Ok(CatalogKind::Programs),
            "courses" | "course" => Ok(CatalogKind::Courses),
            "products" | "product" | "market" => Ok(CatalogKind::Products),
            "news" => Ok(CatalogKind::News),
            other => Err(CatalogError::UnknownCatalog(other.to_string())),
        }
    }
}

/// Layout of a listing view. Each layout has its own page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => f.write_str("grid"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(CatalogError::Config(format!(
                "unknown view mode \"{}\" (expected grid or list)",
                other
            ))),
        }
    }
}

/// A training program run by the cooperative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration_weeks: u32,
    pub location: String,
    pub price: f64,
    pub rating: f64,
    pub enrolled: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub certified: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An e-learning course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub duration_hours: f64,
    pub price: f64,
    pub rating: f64,
    pub enrolled_students: u32,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub has_certificate: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A marketplace listing from a member producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub producer: String,
    pub location: String,
    pub price: f64,
    pub unit: String,
    pub rating: f64,
    pub sales: u32,
    pub listed_at: NaiveDate,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub published_at: NaiveDate,
    pub views: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_kind_parses_singular_and_plural() {
        assert_eq!("courses".parse::<CatalogKind>().unwrap(), CatalogKind::Courses);
        assert_eq!("Course".parse::<CatalogKind>().unwrap(), CatalogKind::Courses);
        assert_eq!(" news ".parse::<CatalogKind>().unwrap(), CatalogKind::News);
        assert_eq!("market".parse::<CatalogKind>().unwrap(), CatalogKind::Products);
    }

    #[test]
    fn catalog_kind_rejects_unknown() {
        let err = "events".parse::<CatalogKind>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCatalog(ref s) if s == "events"));
    }

    #[test]
    fn catalog_kind_display_matches_file_name() {
        for kind in CatalogKind::ALL {
            assert_eq!(kind.file_name(), format!("{}.json", kind));
        }
    }

    #[test]
    fn view_mode_parses() {
        assert_eq!("LIST".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert!("table".parse::<ViewMode>().is_err());
    }

    #[test]
    fn product_defaults_to_in_stock() {
        let json = r#"{
            "id": "p1", "name": "Miel", "description": "", "category": "Miel",
            "producer": "Rucher", "location": "Thiès", "price": 4.5, "unit": "pot",
            "rating": 4.0, "sales": 3, "listed_at": "2024-05-01"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.in_stock);
        assert!(!product.organic);
        assert!(product.tags.is_empty());
    }
}
