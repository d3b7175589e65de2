//! # Configuration
//!
//! Settings live in `config.json` inside the agrocat home directory:
//! `$AGROCAT_HOME` when set, otherwise the platform config directory
//! (via the `directories` crate). A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_view` | `grid` | Layout used when `--view` is not given |
//! | `data_dir` | unset | Directory holding catalog JSON files; unset uses the embedded data |
//! | `color` | `auto` | `auto`, `always` or `never` |
//! | `page_size.<catalog>.<view>` | see [`PageSizes`] | Items per page |
//!
//! Page sizes must be at least 1.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{CatalogKind, ViewMode};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "AGROCAT_HOME";

/// Directory holding `config.json`.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "agrocat", "agrocat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("could not determine config directory".to_string()))
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        })
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "on" => Ok(ColorChoice::Always),
            "never" | "off" => Ok(ColorChoice::Never),
            other => Err(format!(
                "invalid color \"{}\" (expected auto, always or never)",
                other
            )),
        }
    }
}

/// Items per page for one catalog, by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSizes {
    pub grid: usize,
    pub list: usize,
}

impl ViewSizes {
    pub const fn new(grid: usize, list: usize) -> Self {
        Self { grid, list }
    }

    pub fn get(&self, view: ViewMode) -> usize {
        match view {
            ViewMode::Grid => self.grid,
            ViewMode::List => self.list,
        }
    }

    fn get_mut(&mut self, view: ViewMode) -> &mut usize {
        match view {
            ViewMode::Grid => &mut self.grid,
            ViewMode::List => &mut self.list,
        }
    }
}

/// Page sizes per catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizes {
    #[serde(default = "default_programs")]
    pub programs: ViewSizes,
    #[serde(default = "default_courses")]
    pub courses: ViewSizes,
    #[serde(default = "default_products")]
    pub products: ViewSizes,
    #[serde(default = "default_news")]
    pub news: ViewSizes,
}

fn default_programs() -> ViewSizes {
    ViewSizes::new(9, 6)
}

fn default_courses() -> ViewSizes {
    ViewSizes::new(9, 6)
}

fn default_products() -> ViewSizes {
    ViewSizes::new(12, 8)
}

fn default_news() -> ViewSizes {
    ViewSizes::new(9, 6)
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            programs: default_programs(),
            courses: default_courses(),
            products: default_products(),
            news: default_news(),
        }
    }
}

impl PageSizes {
    pub fn for_kind(&self, kind: CatalogKind) -> &ViewSizes {
        match kind {
            CatalogKind::Programs => &self.programs,
            CatalogKind::Courses => &self.courses,
            CatalogKind::Products => &self.products,
            CatalogKind::News => &self.news,
        }
    }

    fn for_kind_mut(&mut self, kind: CatalogKind) -> &mut ViewSizes {
        match kind {
            CatalogKind::Programs => &mut self.programs,
            CatalogKind::Courses => &mut self.courses,
            CatalogKind::Products => &mut self.products,
            CatalogKind::News => &mut self.news,
        }
    }
}

/// Configuration for agrocat, stored in `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgrocatConfig {
    #[serde(default)]
    pub default_view: ViewMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub color: ColorChoice,

    #[serde(default)]
    pub page_sizes: PageSizes,
}

impl AgrocatConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Fails when a stored value is out of range. Use [`AgrocatConfig::load_unchecked`]
    /// to read a file that may need repairing.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = Self::load_unchecked(config_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config without range checks. Only malformed JSON fails.
    pub fn load_unchecked<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Checks every page size. The error names the first offending key.
    pub fn validate(&self) -> Result<()> {
        for kind in CatalogKind::ALL {
            for view in [ViewMode::Grid, ViewMode::List] {
                if self.page_size(kind, view) == 0 {
                    return Err(CatalogError::Config(format!(
                        "page_size.{}.{} must be at least 1",
                        kind, view
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn page_size(&self, kind: CatalogKind, view: ViewMode) -> usize {
        self.page_sizes.for_kind(kind).get(view)
    }

    /// Every settable key, in display order.
    pub fn keys() -> Vec<String> {
        let mut keys = vec![
            "default_view".to_string(),
            "data_dir".to_string(),
            "color".to_string(),
        ];
        for kind in CatalogKind::ALL {
            for view in [ViewMode::Grid, ViewMode::List] {
                keys.push(format!("page_size.{}.{}", kind, view));
            }
        }
        keys
    }

    /// Current value of `key`, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_view" => Some(self.default_view.to_string()),
            "data_dir" => Some(
                self.data_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "(embedded)".to_string()),
            ),
            "color" => Some(self.color.to_string()),
            _ => {
                let (kind, view) = parse_page_size_key(key)?;
                Some(self.page_size(kind, view).to_string())
            }
        }
    }

    /// Update `key` from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_view" => {
                self.default_view = value.parse::<ViewMode>()?;
            }
            "data_dir" => {
                self.data_dir = match value.trim() {
                    "" | "embedded" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "color" => {
                self.color = value.parse::<ColorChoice>().map_err(CatalogError::Config)?;
            }
            _ => {
                let (kind, view) = parse_page_size_key(key)
                    .ok_or_else(|| CatalogError::Config(format!("unknown config key: {}", key)))?;
                let size: usize = value.trim().parse().map_err(|_| {
                    CatalogError::Config(format!("invalid page size \"{}\"", value))
                })?;
                if size == 0 {
                    return Err(CatalogError::Config(
                        "page size must be at least 1".to_string(),
                    ));
                }
                *self.page_sizes.for_kind_mut(kind).get_mut(view) = size;
            }
        }
        Ok(())
    }
}

fn parse_page_size_key(key: &str) -> Option<(CatalogKind, ViewMode)> {
    let rest = key.strip_prefix("page_size.")?;
    let (kind, view) = rest.split_once('.')?;
    Some((kind.parse().ok()?, view.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_page_sizes() {
        let config = AgrocatConfig::default();
        assert_eq!(config.page_size(CatalogKind::Courses, ViewMode::Grid), 9);
        assert_eq!(config.page_size(CatalogKind::Courses, ViewMode::List), 6);
        assert_eq!(config.page_size(CatalogKind::Products, ViewMode::Grid), 12);
        assert_eq!(config.page_size(CatalogKind::Products, ViewMode::List), 8);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = AgrocatConfig::load(dir.path()).unwrap();
        assert_eq!(config, AgrocatConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = AgrocatConfig::default();
        config.set("default_view", "list").unwrap();
        config.set("page_size.news.list", "4").unwrap();
        config.save(dir.path().join("nested")).unwrap();

        let loaded = AgrocatConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded.default_view, ViewMode::List);
        assert_eq!(loaded.page_size(CatalogKind::News, ViewMode::List), 4);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"page_sizes": {"courses": {"grid": 3, "list": 2}}}"#,
        )
        .unwrap();

        let config = AgrocatConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size(CatalogKind::Courses, ViewMode::Grid), 3);
        assert_eq!(config.page_size(CatalogKind::Programs, ViewMode::Grid), 9);
    }

    #[test]
    fn test_zero_page_size_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"page_sizes": {"news": {"grid": 0, "list": 2}}}"#,
        )
        .unwrap();
        let err = AgrocatConfig::load(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Config error: page_size.news.grid must be at least 1");

        let config = AgrocatConfig::load_unchecked(dir.path()).unwrap();
        assert_eq!(config.page_size(CatalogKind::News, ViewMode::Grid), 0);
        assert_eq!(config.page_size(CatalogKind::News, ViewMode::List), 2);
    }

    #[test]
    fn test_set_rejects_zero_and_garbage() {
        let mut config = AgrocatConfig::default();
        assert!(matches!(
            config.set("page_size.courses.grid", "0"),
            Err(CatalogError::Config(_))
        ));
        assert!(config.set("page_size.courses.grid", "lots").is_err());
        assert!(config.set("page_size.events.grid", "3").is_err());
        assert!(config.set("colour", "never").is_err());
        assert!(config.set("default_view", "table").is_err());
        assert_eq!(config, AgrocatConfig::default());
    }

    #[test]
    fn test_get_every_key() {
        let config = AgrocatConfig::default();
        for key in AgrocatConfig::keys() {
            assert!(config.get(&key).is_some(), "{} has no value", key);
        }
        assert_eq!(config.get("data_dir").unwrap(), "(embedded)");
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_data_dir_can_be_cleared() {
        let mut config = AgrocatConfig::default();
        config.set("data_dir", "/srv/agrocat").unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/agrocat")));
        config.set("data_dir", "embedded").unwrap();
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_color_choice_parses() {
        assert_eq!("ALWAYS".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("off".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("sometimes".parse::<ColorChoice>().is_err());
    }
}
