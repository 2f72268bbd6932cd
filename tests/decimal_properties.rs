#![allow(clippy::unwrap_used, clippy::float_cmp)]

use decigeo::math::{add, div, multi, round, sub};
use proptest::prelude::*;

/// Integers that become decimals with five fractional digits once divided by
/// `100_000`.
fn hundred_thousandths() -> impl Strategy<Value = i32> {
    -1_000_000_000i32..=1_000_000_000
}

/// Decimal literals with at most five fractional digits, e.g. `-1234.56789`.
fn decimal() -> impl Strategy<Value = f64> {
    hundred_thousandths().prop_map(|n| f64::from(n) / 100_000.0)
}

fn non_zero_decimal() -> impl Strategy<Value = f64> {
    decimal().prop_filter("divisor must not be zero", |v| *v != 0.0)
}

proptest! {
    #[test]
    fn add_matches_exact_decimal_sum(a in hundred_thousandths(), b in hundred_thousandths()) {
        let (x, y) = (f64::from(a) / 100_000.0, f64::from(b) / 100_000.0);
        let exact = (f64::from(a) + f64::from(b)) / 100_000.0;
        prop_assert_eq!(add(&[x, y]).unwrap(), exact);
    }

    #[test]
    fn sub_undoes_add(a in decimal(), b in decimal()) {
        let sum = add(&[a, b]).unwrap();
        prop_assert_eq!(sub(&[sum, b]).unwrap(), a);
    }

    #[test]
    fn add_is_commutative(a in decimal(), b in decimal(), c in decimal()) {
        prop_assert_eq!(add(&[a, b, c]).unwrap(), add(&[c, a, b]).unwrap());
    }

    #[test]
    fn div_is_left_associative(a in decimal(), b in non_zero_decimal(), c in non_zero_decimal()) {
        let chained = div(&[a, b, c]).unwrap();
        let nested = div(&[div(&[a, b]).unwrap(), c]).unwrap();
        prop_assert_eq!(chained, nested);
    }

    #[test]
    fn multiplying_by_power_of_ten_shifts_digits(n in hundred_thousandths()) {
        let x = f64::from(n) / 100_000.0;
        prop_assert_eq!(multi(&[x, 100_000.0]).unwrap(), f64::from(n));
    }

    #[test]
    fn round_is_idempotent(x in decimal(), digits in 0u32..6) {
        let once = round(x, digits).unwrap();
        prop_assert_eq!(round(once, digits).unwrap(), once);
    }

    #[test]
    fn round_keeps_values_with_few_digits(x in decimal()) {
        prop_assert_eq!(round(x, 5).unwrap(), x);
    }
}

#[test]
fn classic_drift_cases() {
    assert_eq!(add(&[0.1, 0.2]).unwrap(), 0.3);
    assert_eq!(sub(&[add(&[0.1, 0.2]).unwrap(), 0.2]).unwrap(), 0.1);
    assert_eq!(round(1.005, 2).unwrap(), 1.01);
    let third = div(&[1.0, 3.0]).unwrap();
    assert_eq!(div(&[1.0, 3.0, 2.0]).unwrap(), div(&[third, 2.0]).unwrap());
}
