//! Base FX system - the RateSource trait

use crate::currency::{CurrencyCode, CurrencyPair};

/// Trait for reading pairwise FX rates
///
/// A source only answers for the pairs it stores. Inversion and bridging
/// are the resolver's job, so `rate` must not synthesize rates.
pub trait RateSource: Send + Sync {
    /// Stored rate for `pair`, such that: to_amount = from_amount * rate
    fn rate(&self, pair: &CurrencyPair) -> Option<f64>;

    /// Whether `code` appears on either side of any stored pair
    fn is_known(&self, code: &CurrencyCode) -> bool;

    /// Check if a stored rate exists for `pair`
    fn has_rate(&self, pair: &CurrencyPair) -> bool {
        self.rate(pair).is_some()
    }
}

impl<S: RateSource + ?Sized> RateSource for &S {
    fn rate(&self, pair: &CurrencyPair) -> Option<f64> {
        (**self).rate(pair)
    }

    fn is_known(&self, code: &CurrencyCode) -> bool {
        (**self).is_known(code)
    }
}
