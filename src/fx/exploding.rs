//! Exploding rate source - testing stub
//!
//! This source panics on any usage. Use it to prove that a code path (such
//! as same-currency conversion) never touches rate data.

use super::base::RateSource;
use crate::currency::{CurrencyCode, CurrencyPair};

/// Rate source that panics on every lookup
///
/// # Example
/// ```should_panic
/// use rusty_fx::fx::{ExplodingRateSource, RateResolver};
///
/// let resolver = RateResolver::new(ExplodingRateSource::new());
/// let eur = "EUR".parse().unwrap();
/// let usd = "USD".parse().unwrap();
///
/// // This will panic!
/// resolver.convert(1.0, &eur, &usd).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplodingRateSource {
    /// Custom panic message
    message: Option<&'static str>,
}

impl ExplodingRateSource {
    /// Create new exploding source with default message
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Create with custom panic message
    pub fn with_message(message: &'static str) -> Self {
        Self {
            message: Some(message),
        }
    }

    fn panic_message(&self) -> &'static str {
        self.message
            .unwrap_or("Rate source access not allowed in this context")
    }
}

impl RateSource for ExplodingRateSource {
    fn rate(&self, pair: &CurrencyPair) -> Option<f64> {
        panic!("{}\n\nAttempted rate lookup: {}", self.panic_message(), pair);
    }

    fn is_known(&self, code: &CurrencyCode) -> bool {
        panic!("{}\n\nAttempted membership check: {}", self.panic_message(), code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Rate source access not allowed")]
    fn test_rate_lookup_panics() {
        let source = ExplodingRateSource::new();
        let pair = "EUR_USD".parse().unwrap();
        source.rate(&pair);
    }

    #[test]
    #[should_panic(expected = "single-currency ledger")]
    fn test_custom_message() {
        let source = ExplodingRateSource::with_message("single-currency ledger");
        source.is_known(&CurrencyCode::usd());
    }
}
