//! Property tests for conversion invariants

use proptest::prelude::*;
use rusty_fx::prelude::*;

fn reference_codes() -> impl Strategy<Value = CurrencyCode> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF"])
        .prop_map(|c| CurrencyCode::new(c).unwrap())
}

fn any_code() -> impl Strategy<Value = CurrencyCode> {
    "[A-Za-z]{3}".prop_map(|c| CurrencyCode::new(&c).unwrap())
}

proptest! {
    #[test]
    fn identity_returns_amount_unchanged(amount in any::<f64>(), currency in any_code()) {
        let resolver = RateResolver::new(RateTable::reference());
        let converted = resolver.convert(amount, &currency, &currency).unwrap();
        prop_assert_eq!(converted.to_bits(), amount.to_bits());
    }

    #[test]
    fn reference_table_is_fully_connected(
        amount in -1e6f64..1e6,
        from in reference_codes(),
        to in reference_codes(),
    ) {
        let resolver = RateResolver::new(RateTable::reference());
        let converted = resolver.convert(amount, &from, &to).unwrap();
        prop_assert!(converted.is_finite());
        if amount != 0.0 {
            prop_assert_eq!(converted.signum(), amount.signum());
        }
    }

    #[test]
    fn conversion_is_linear_in_amount(
        amount in 0.01f64..1e6,
        from in reference_codes(),
        to in reference_codes(),
    ) {
        let resolver = RateResolver::new(RateTable::reference());
        let rate = resolver.rate(&from, &to).unwrap();
        let converted = resolver.convert(amount, &from, &to).unwrap();
        prop_assert!((converted - amount * rate).abs() <= 1e-9 * converted.abs().max(1.0));
    }

    #[test]
    fn reciprocal_rates_round_trip(amount in 0.01f64..1e6, rate in 0.001f64..1000.0) {
        let mut table = RateTable::new();
        table
            .insert(CurrencyCode::usd(), CurrencyCode::new("EUR").unwrap(), rate)
            .unwrap();
        let resolver = RateResolver::new(table);
        let usd = CurrencyCode::usd();
        let eur = CurrencyCode::new("EUR").unwrap();

        let there = resolver.convert(amount, &usd, &eur).unwrap();
        let back = resolver.convert(there, &eur, &usd).unwrap();
        prop_assert!((back - amount).abs() <= 1e-9 * amount);
    }

    #[test]
    fn unknown_source_currency_is_rejected(code in "[Q-Z]{4}") {
        let resolver = RateResolver::new(RateTable::reference());
        let from = CurrencyCode::new(&code).unwrap();
        let result = resolver.convert(1.0, &from, &CurrencyCode::usd());
        let is_unknown = matches!(result, Err(FxError::UnknownCurrency(_)));
        prop_assert!(is_unknown);
    }

    #[test]
    fn non_positive_rates_are_rejected(rate in -1e6f64..=0.0) {
        let mut table = RateTable::new();
        let result = table.insert(CurrencyCode::usd(), CurrencyCode::new("EUR").unwrap(), rate);
        let is_invalid = matches!(result, Err(FxError::InvalidRate { .. }));
        prop_assert!(is_invalid);
        prop_assert!(table.is_empty());
    }
}
