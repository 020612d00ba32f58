//! Error types for rusty_fx

use thiserror::Error;

/// Main error type for rusty_fx
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Cannot convert from {from} to {to} with available rates")]
    NoConversionPath {
        from: String,
        to: String,
        /// Failure of the bridge leg, when a bridge through the base currency was attempted
        #[source]
        source: Option<Box<FxError>>,
    },

    #[error("Invalid rate for {pair}: {rate} (rates must be positive and finite)")]
    InvalidRate { pair: String, rate: f64 },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl FxError {
    /// Build a `NoConversionPath` with no underlying cause
    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        FxError::NoConversionPath {
            from: from.into(),
            to: to.into(),
            source: None,
        }
    }

    /// Innermost cause of a failed bridge, if any
    pub fn bridge_cause(&self) -> Option<&FxError> {
        match self {
            FxError::NoConversionPath {
                source: Some(inner),
                ..
            } => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Result type alias for rusty_fx operations
pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_currency_message() {
        let err = FxError::UnknownCurrency("XXX".to_string());
        assert_eq!(err.to_string(), "Unknown currency: XXX");
    }

    #[test]
    fn test_no_path_message_names_both_currencies() {
        let err = FxError::no_path("CAD", "AUD");
        let msg = err.to_string();
        assert!(msg.contains("CAD"));
        assert!(msg.contains("AUD"));
        assert!(err.source().is_none());
        assert!(err.bridge_cause().is_none());
    }

    #[test]
    fn test_no_path_exposes_bridge_cause() {
        let err = FxError::NoConversionPath {
            from: "NZD".to_string(),
            to: "EUR".to_string(),
            source: Some(Box::new(FxError::no_path("NZD", "USD"))),
        };

        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("NZD"));
        assert!(cause.to_string().contains("USD"));
        assert!(matches!(
            err.bridge_cause(),
            Some(FxError::NoConversionPath { .. })
        ));
    }

    #[test]
    fn test_invalid_rate_message() {
        let err = FxError::InvalidRate {
            pair: "USD/EUR".to_string(),
            rate: -0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("USD/EUR"));
        assert!(msg.contains("-0.5"));
    }
}
