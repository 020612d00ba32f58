//! Foreign Exchange (FX) rate system
//!
//! # Components
//!
//! - **base**: the `RateSource` trait
//! - **table**: in-memory rate table with CSV and config loading
//! - **resolver**: identity / direct / reverse / bridged rate resolution
//! - **exploding**: testing stub that panics on rate access
//!
//! # Example
//!
//! ```rust
//! use rusty_fx::fx::{RateResolver, RateTable};
//!
//! let resolver = RateResolver::new(RateTable::reference());
//! let usd = "USD".parse().unwrap();
//! let eur = "EUR".parse().unwrap();
//!
//! let eur_amount = resolver.convert(100.0, &usd, &eur).unwrap();
//! assert!((eur_amount - 85.0).abs() < 1e-9);
//! ```

pub mod base;
pub mod exploding;
pub mod resolver;
pub mod table;

pub use base::RateSource;
pub use exploding::ExplodingRateSource;
pub use resolver::{Conversion, ConversionRequest, RateResolver, ResolverOptions, Route};
pub use table::RateTable;
