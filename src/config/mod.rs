use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{FormatOptions, NegativeStyle},
    errors::ConfigError,
    utils::{app_data_dir, config_file_in},
};

/// User preferences read from `config.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub negative_style: NegativeStyle,
    pub grouping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_width: Option<u16>,
    pub plain_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_owner: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            negative_style: NegativeStyle::Sign,
            grouping: false,
            chart_width: None,
            plain_mode: false,
            default_owner: None,
        }
    }
}

impl Config {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            symbol: self.currency_symbol.clone(),
            negative_style: self.negative_style,
            grouping: self.grouping,
        }
    }
}

/// Locates and reads the configuration file. The tracker never writes it.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: config_file_in(base.as_ref()),
        }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&data)?;
        tracing::info!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
