//! Property-Based Test Generators
//!
//! Proptest strategies for wire values and document fields, plus a couple of
//! fake-data helpers for realistic names.

use core_kernel::{WireDate, WireDateTime};
use fake::faker::name::raw::Name;
use fake::locales::ZH_CN;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for timestamps the wire pattern can represent.
///
/// Bounded to four-digit years; the pattern has no representation outside
/// them.
pub fn wire_datetime_strategy() -> impl Strategy<Value = WireDateTime> {
    (1900i32..=2099, 1u32..=365, 0u32..86_400).prop_map(|(year, ordinal, seconds)| {
        use chrono::Datelike;
        let day = chrono::NaiveDate::from_yo_opt(year, ordinal).expect("ordinal in range");
        WireDateTime::from_wire_parts(
            day.year(),
            day.month(),
            day.day(),
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60,
        )
        .expect("parts in range")
    })
}

/// Strategy for calendar days within the representable range.
pub fn wire_date_strategy() -> impl Strategy<Value = WireDate> {
    (1900i32..=2099, 1u32..=365).prop_map(|(year, ordinal)| {
        WireDate::new(chrono::NaiveDate::from_yo_opt(year, ordinal).expect("ordinal in range"))
    })
}

/// Strategy for the `"0"`/`"1"` narrow-string flags.
pub fn string_flag_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("0".to_string())),
        Just(Some("1".to_string())),
    ]
}

/// Strategy for exact decimal amounts with up to two places.
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for plausible business numbers.
pub fn proposal_no_strategy() -> impl Strategy<Value = String> {
    (2020u32..2030, 1u32..1_000_000).prop_map(|(year, seq)| format!("P{year}{seq:06}"))
}

/// A realistic Chinese person name for participant fixtures.
pub fn fake_person_name() -> String {
    Name(ZH_CN).fake()
}
