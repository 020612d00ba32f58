//! Sample conversions against the reference table

use crate::currency::CurrencyCode;
use crate::error::Result;
use crate::fx::{ConversionRequest, RateResolver, RateSource};
use std::io::Write;

/// `(amount, from, to)` cases shown by `rusty-fx demo`
pub const DEMO_CASES: [(f64, &str, &str); 5] = [
    (100.0, "USD", "EUR"),
    (50.0, "EUR", "GBP"),
    (1000.0, "USD", "JPY"),
    (75.0, "GBP", "USD"),
    (200.0, "CAD", "AUD"),
];

pub fn demo_requests() -> Vec<ConversionRequest> {
    DEMO_CASES
        .iter()
        .map(|&(amount, from, to)| {
            ConversionRequest::new(
                amount,
                CurrencyCode::from_static(from),
                CurrencyCode::from_static(to),
            )
        })
        .collect()
}

/// Print every demo case; returns how many failed
pub fn run_demo<S: RateSource, W: Write>(
    resolver: &RateResolver<S>,
    precision: usize,
    mut output: W,
) -> Result<usize> {
    let rule = "=".repeat(40);
    writeln!(output, "Currency Conversion Examples:")?;
    writeln!(output, "{}", rule)?;

    let mut failed = 0;
    for request in demo_requests() {
        match resolver.resolve(&request) {
            Ok(conversion) => {
                writeln!(output, "{}", conversion.format_with_precision(precision))?
            }
            Err(e) => {
                failed += 1;
                writeln!(
                    output,
                    "Error converting {} {} to {}: {}",
                    request.amount, request.from, request.to, e
                )?;
            }
        }
    }

    writeln!(output, "{}", rule)?;
    Ok(failed)
}
