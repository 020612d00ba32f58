//! Rate resolution: identity, direct, reverse and base-currency bridged lookups
//!
//! Resolution tries, in order:
//!
//! 1. identity (`from == to`), which never consults the rate source
//! 2. the stored `from -> to` rate
//! 3. the inverse of the stored `to -> from` rate
//! 4. a two-leg bridge `from -> base -> to`, each leg limited to steps 1-3
//!
//! The bridge is only attempted when neither side is the base currency, so
//! resolution never goes deeper than two hops.

use super::base::RateSource;
use super::table::validate_rate;
use crate::currency::{CurrencyCode, CurrencyPair};
use crate::error::{FxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Hub currency for bridged conversions (default: USD)
    pub base_currency: CurrencyCode,
    /// Check that both currencies are known before the identity short-circuit.
    /// When false, `X -> X` succeeds even if `X` appears in no rate.
    pub strict_identity: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::usd(),
            strict_identity: false,
        }
    }
}

/// How a conversion was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Identity,
    Direct,
    Reverse,
    Bridged { via: CurrencyCode },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Identity => f.write_str("identity"),
            Route::Direct => f.write_str("direct"),
            Route::Reverse => f.write_str("reverse"),
            Route::Bridged { via } => write!(f, "bridged via {}", via),
        }
    }
}

/// Amount to convert between two currencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { amount, from, to }
    }
}

impl FromStr for ConversionRequest {
    type Err = FxError;

    /// Parse `"<amount> <from> <to>"`, e.g. `"100 usd eur"`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(FxError::ParseError(format!(
                "expected '<amount> <from> <to>', got {} fields",
                parts.len()
            )));
        }

        let amount: f64 = parts[0].parse().map_err(|e| {
            FxError::ParseError(format!("Invalid amount '{}': {}", parts[0], e))
        })?;

        Ok(Self {
            amount,
            from: CurrencyCode::new(parts[1])?,
            to: CurrencyCode::new(parts[2])?,
        })
    }
}

/// Successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub converted: f64,
    pub route: Route,
}

impl Conversion {
    /// Render as `"<amount> <FROM> = <converted> <TO>"` with `precision` decimals
    pub fn format_with_precision(&self, precision: usize) -> String {
        format!(
            "{} {} = {:.*} {}",
            self.request.amount, self.request.from, precision, self.converted, self.request.to
        )
    }

    /// Pretty-printed JSON with the request fields, `converted` and `route`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_precision(2))
    }
}

/// Resolves conversions against a [`RateSource`]
///
/// # Example
/// ```
/// use rusty_fx::fx::{RateResolver, RateTable};
///
/// let resolver = RateResolver::new(RateTable::reference());
/// let cad = "CAD".parse().unwrap();
/// let aud = "AUD".parse().unwrap();
///
/// // No CAD/AUD rate: 200 CAD -> 160 USD (CAD_USD) -> 216 AUD (USD_AUD)
/// let amount = resolver.convert(200.0, &cad, &aud).unwrap();
/// assert!((amount - 216.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct RateResolver<S> {
    source: S,
    options: ResolverOptions,
}

impl<S: RateSource> RateResolver<S> {
    /// Create resolver with USD as base currency
    pub fn new(source: S) -> Self {
        Self::with_options(source, ResolverOptions::default())
    }

    /// Create with configuration
    pub fn with_options(source: S, options: ResolverOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Base currency used for bridged conversions
    pub fn base_currency(&self) -> &CurrencyCode {
        &self.options.base_currency
    }

    /// Convert `amount` from one currency to another
    pub fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64> {
        self.resolve_route(amount, from, to).map(|(converted, _)| converted)
    }

    /// Convert and report the route taken
    pub fn resolve(&self, request: &ConversionRequest) -> Result<Conversion> {
        let (converted, route) = self.resolve_route(request.amount, &request.from, &request.to)?;
        Ok(Conversion {
            request: request.clone(),
            converted,
            route,
        })
    }

    /// Effective multiplier from `from` to `to`
    pub fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64> {
        self.convert(1.0, from, to)
    }

    /// Batch convert multiple amounts at once
    pub fn convert_amounts(
        &self,
        amounts: &[(f64, CurrencyCode)],
        to: &CurrencyCode,
    ) -> Result<Vec<f64>> {
        amounts
            .iter()
            .map(|(amount, from)| self.convert(*amount, from, to))
            .collect()
    }

    /// Total of all holdings expressed in `to`
    pub fn total_value(&self, holdings: &[(f64, CurrencyCode)], to: &CurrencyCode) -> Result<f64> {
        let converted = self.convert_amounts(holdings, to)?;
        Ok(converted.iter().sum())
    }

    fn resolve_route(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<(f64, Route)> {
        if !self.options.strict_identity && from == to {
            return Ok((amount, Route::Identity));
        }

        for code in [from, to] {
            if !self.source.is_known(code) {
                return Err(FxError::UnknownCurrency(code.to_string()));
            }
        }

        if from == to {
            return Ok((amount, Route::Identity));
        }

        if let Some(resolved) = self.single_hop(amount, from, to)? {
            log::debug!("{} -> {} resolved {}", from, to, resolved.1);
            return Ok(resolved);
        }

        let base = &self.options.base_currency;
        if from != base && to != base {
            return match self.bridge(amount, from, to) {
                Ok(converted) => {
                    log::debug!("{} -> {} resolved via {}", from, to, base);
                    Ok((converted, Route::Bridged { via: base.clone() }))
                }
                Err(cause) => {
                    log::debug!("Bridge {} -> {} -> {} failed: {}", from, base, to, cause);
                    Err(FxError::NoConversionPath {
                        from: from.to_string(),
                        to: to.to_string(),
                        source: Some(Box::new(cause)),
                    })
                }
            };
        }

        Err(FxError::no_path(from.as_str(), to.as_str()))
    }

    /// Direct rate, then inverted reverse rate
    fn single_hop(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<(f64, Route)>> {
        let pair = CurrencyPair::new(from.clone(), to.clone());
        if let Some(rate) = self.source.rate(&pair) {
            let rate = validate_rate(&pair, rate)?;
            return Ok(Some((amount * rate, Route::Direct)));
        }

        let reverse = pair.inverse();
        if let Some(rate) = self.source.rate(&reverse) {
            let rate = validate_rate(&reverse, rate)?;
            return Ok(Some((amount / rate, Route::Reverse)));
        }

        Ok(None)
    }

    /// One leg of a bridge; never bridges again
    fn leg(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64> {
        if from == to {
            return Ok(amount);
        }
        match self.single_hop(amount, from, to)? {
            Some((converted, _)) => Ok(converted),
            None => Err(FxError::no_path(from.as_str(), to.as_str())),
        }
    }

    fn bridge(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64> {
        let base = &self.options.base_currency;
        let base_amount = self.leg(amount, from, base)?;
        self.leg(base_amount, base, to)
    }
}
