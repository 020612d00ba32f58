//! In-memory rate table
//!
//! Stores one multiplier per ordered currency pair. Rates are validated on
//! the way in, so every stored rate is positive and finite.

use super::base::RateSource;
use crate::currency::{CurrencyCode, CurrencyPair};
use crate::error::{FxError, Result};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

/// Pairwise FX rate storage
///
/// # Example
/// ```
/// use rusty_fx::currency::{CurrencyCode, CurrencyPair};
/// use rusty_fx::fx::{RateSource, RateTable};
///
/// let usd: CurrencyCode = "USD".parse().unwrap();
/// let eur: CurrencyCode = "EUR".parse().unwrap();
///
/// let mut table = RateTable::new();
/// table.insert(usd.clone(), eur.clone(), 0.85).unwrap();
///
/// assert_eq!(table.rate(&CurrencyPair::new(usd, eur)), Some(0.85));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<CurrencyPair, f64>,
}

/// One row of a rate file: `from,to,rate`
#[derive(Debug, Deserialize)]
struct RateRecord {
    from: String,
    to: String,
    rate: f64,
}

/// Reject zero, negative and non-finite rates
pub(crate) fn validate_rate(pair: &CurrencyPair, rate: f64) -> Result<f64> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(FxError::InvalidRate {
            pair: pair.to_string(),
            rate,
        })
    }
}

impl RateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Sample table with USD as the hub currency
    pub fn reference() -> Self {
        const RATES: [(&str, &str, f64); 16] = [
            ("USD", "EUR", 0.85),
            ("USD", "GBP", 0.73),
            ("USD", "JPY", 110.0),
            ("USD", "CAD", 1.25),
            ("USD", "AUD", 1.35),
            ("USD", "CHF", 0.92),
            ("EUR", "USD", 1.18),
            ("EUR", "GBP", 0.86),
            ("EUR", "JPY", 129.4),
            ("GBP", "USD", 1.37),
            ("GBP", "EUR", 1.16),
            ("JPY", "USD", 0.0091),
            ("JPY", "EUR", 0.0077),
            ("CAD", "USD", 0.80),
            ("AUD", "USD", 0.74),
            ("CHF", "USD", 1.09),
        ];

        let rates = RATES
            .iter()
            .map(|&(from, to, rate)| {
                let pair = CurrencyPair::new(
                    CurrencyCode::from_static(from),
                    CurrencyCode::from_static(to),
                );
                (pair, rate)
            })
            .collect();

        Self { rates }
    }

    /// Add a single rate, replacing any previous rate for the same pair
    pub fn insert(&mut self, from: CurrencyCode, to: CurrencyCode, rate: f64) -> Result<()> {
        let pair = CurrencyPair::new(from, to);
        if pair.from == pair.to {
            return Err(FxError::InvalidData(format!(
                "Self-referential rate for {}",
                pair.from
            )));
        }
        let rate = validate_rate(&pair, rate)?;
        if let Some(previous) = self.rates.insert(pair.clone(), rate) {
            log::debug!("Replaced rate {} {} -> {}", pair, previous, rate);
        }
        Ok(())
    }

    /// Add multiple rates; stops at the first invalid entry
    pub fn extend<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (CurrencyCode, CurrencyCode, f64)>,
    {
        for (from, to, rate) in entries {
            self.insert(from, to, rate)?;
        }
        Ok(())
    }

    /// Build from `"FROM_TO" -> rate` entries, as found in a config file
    pub fn from_map<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let mut table = Self::new();
        for (key, rate) in entries {
            let pair: CurrencyPair = key.parse()?;
            table.insert(pair.from, pair.to, *rate)?;
        }
        Ok(table)
    }

    /// Load rates from CSV data
    ///
    /// Expected header: `from,to,rate`. Lines starting with `#` are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for (idx, record) in rdr.deserialize::<RateRecord>().enumerate() {
            let record = record?;
            let from = CurrencyCode::new(&record.from)?;
            let to = CurrencyCode::new(&record.to)?;
            table.insert(from, to, record.rate).map_err(|e| {
                FxError::InvalidData(format!("Rate record {}: {}", idx + 1, e))
            })?;
        }

        log::debug!("Loaded {} rates from CSV", table.len());
        Ok(table)
    }

    /// Load rates from a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Stored rate for an ordered pair
    pub fn get(&self, pair: &CurrencyPair) -> Option<f64> {
        self.rates.get(pair).copied()
    }

    /// Get number of stored rate pairs
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All currencies mentioned by any pair, sorted
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        self.rates
            .keys()
            .flat_map(|pair| [pair.from.clone(), pair.to.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All stored pairs with their rates, sorted by pair
    pub fn pairs(&self) -> Vec<(CurrencyPair, f64)> {
        let mut pairs: Vec<_> = self
            .rates
            .iter()
            .map(|(pair, rate)| (pair.clone(), *rate))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// Drop every rate involving `code`; returns how many were removed
    pub fn remove_currency(&mut self, code: &CurrencyCode) -> usize {
        let before = self.rates.len();
        self.rates.retain(|pair, _| !pair.involves(code));
        before - self.rates.len()
    }

    /// Clear all rates
    pub fn clear(&mut self) {
        self.rates.clear();
    }
}

impl RateSource for RateTable {
    fn rate(&self, pair: &CurrencyPair) -> Option<f64> {
        self.get(pair)
    }

    fn is_known(&self, code: &CurrencyCode) -> bool {
        self.rates.keys().any(|pair| pair.involves(code))
    }
}
