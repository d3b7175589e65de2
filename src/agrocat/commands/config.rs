use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::AgrocatConfig;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Config commands read the file without range checks, so a bad stored value
/// can be shown and overwritten. `Set` saves once the new value itself is
/// valid and reports anything still out of range.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = AgrocatConfig::load_unchecked(dir)?;
            let mut result = CmdResult::default();
            if let Err(e) = config.validate() {
                result.add_message(CmdMessage::error(e.to_string()));
            }
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = AgrocatConfig::load_unchecked(dir)?;
            let value = config
                .get(&key)
                .ok_or_else(|| CatalogError::Config(format!("unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = AgrocatConfig::load_unchecked(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            if let Err(e) = config.validate() {
                result.add_message(CmdMessage::error(e.to_string()));
            }
            Ok(result.with_config(config))
        }
    }
}
