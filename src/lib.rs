//! # rusty_fx
//!
//! Currency conversion over a small table of pairwise exchange rates.
//!
//! A conversion is resolved by the first strategy that applies: same currency,
//! the stored rate, the inverse of the opposite rate, or a two-leg bridge
//! through a base currency (USD by default).
//!
//! ## Example
//!
//! ```rust
//! use rusty_fx::prelude::*;
//!
//! let resolver = RateResolver::new(RateTable::reference());
//! let request: ConversionRequest = "100 USD EUR".parse().unwrap();
//!
//! let conversion = resolver.resolve(&request).unwrap();
//! assert_eq!(conversion.to_string(), "100 USD = 85.00 EUR");
//! ```

pub mod config;
pub mod currency;
pub mod demo;
pub mod error;
pub mod fx;
pub mod session;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::config::Config;
    pub use crate::currency::{CurrencyCode, CurrencyPair};
    pub use crate::error::{FxError, Result};
    pub use crate::fx::{
        Conversion, ConversionRequest, RateResolver, RateSource, RateTable, ResolverOptions, Route,
    };
    pub use crate::session::{Session, SessionSummary};
}
