//! Currency codes and currency pairs

use crate::error::{FxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency code such as `USD`
///
/// Codes are trimmed and uppercased on construction. Any non-empty code is
/// accepted; there is no check against the ISO 4217 list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a code, normalizing case and surrounding whitespace
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(FxError::InvalidData(
                "Currency code must not be empty".to_string(),
            ));
        }
        Ok(Self(code.to_uppercase()))
    }

    /// Wrap a code already known to be uppercase and non-empty
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    /// US Dollar, the default base currency
    pub fn usd() -> Self {
        Self::from_static("USD")
    }

    /// Get currency code as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FxError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered currency pair: one unit of `from` is worth `rate` units of `to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyPair {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { from, to }
    }

    /// Get the inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }

    /// Whether either side of the pair is `code`
    pub fn involves(&self, code: &CurrencyCode) -> bool {
        &self.from == code || &self.to == code
    }
}

impl FromStr for CurrencyPair {
    type Err = FxError;

    /// Parse from `"EUR_USD"`, `"EUR/USD"` or `"EURUSD"`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (from, to) = if let Some(split) = s.split_once(['_', '/']) {
            split
        } else if s.len() == 6 && s.is_ascii() {
            s.split_at(3)
        } else {
            return Err(FxError::ParseError(format!(
                "Invalid currency pair format: {}",
                s
            )));
        };

        if to.contains(['_', '/']) {
            return Err(FxError::ParseError(format!(
                "Invalid currency pair format: {}",
                s
            )));
        }

        Ok(Self::new(CurrencyCode::new(from)?, CurrencyCode::new(to)?))
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
