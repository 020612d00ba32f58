//! Configuration file support
//!
//! ```toml
//! base_currency = "USD"
//! strict_identity = false
//! precision = 2
//! rates_file = "rates.csv"
//!
//! [rates]
//! USD_EUR = 0.85
//! CAD_USD = 0.80
//! ```

use crate::currency::CurrencyCode;
use crate::error::{FxError, Result};
use crate::fx::{RateTable, ResolverOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_PRECISION: usize = 12;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_currency")]
    pub base_currency: CurrencyCode,
    #[serde(default)]
    pub strict_identity: bool,
    /// Decimal places when printing converted amounts
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// CSV file with `from,to,rate` records
    #[serde(default)]
    pub rates_file: Option<PathBuf>,
    /// Inline rates keyed as `FROM_TO`
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

fn default_base_currency() -> CurrencyCode {
    CurrencyCode::usd()
}

fn default_precision() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            strict_identity: false,
            precision: default_precision(),
            rates_file: None,
            rates: BTreeMap::new(),
        }
    }
}

impl Config {
    /// `~/.rusty-fx/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rusty-fx").join("config.toml"))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path`, or from the default location when `path` is None.
    /// Any failure falls back to defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let candidate = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        let Some(config_path) = candidate else {
            return Config::default();
        };

        match Self::from_path(&config_path) {
            Ok(config) => {
                log::debug!("Loaded config from {}", config_path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load config {}: {}; using defaults",
                    config_path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(FxError::ConfigError(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            base_currency: self.base_currency.clone(),
            strict_identity: self.strict_identity,
        }
    }

    /// Build the rate table this configuration describes
    ///
    /// Rates come from `rates_file` (or `override_file`), with inline `[rates]`
    /// laid over them. With neither, the reference table is used.
    pub fn rate_table(&self, override_file: Option<&Path>) -> Result<RateTable> {
        let file = override_file.or(self.rates_file.as_deref());

        let mut table = match file {
            Some(path) => RateTable::from_csv_path(path).map_err(|e| {
                FxError::ConfigError(format!("rates file {}: {}", path.display(), e))
            })?,
            None if self.rates.is_empty() => return Ok(RateTable::reference()),
            None => RateTable::new(),
        };

        let inline = RateTable::from_map(&self.rates)?;
        for (pair, rate) in inline.pairs() {
            table.insert(pair.from, pair.to, rate)?;
        }

        Ok(table)
    }
}
