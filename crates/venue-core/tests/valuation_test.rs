use chrono::{DateTime, Duration, TimeZone, Utc};
use venue_core::valuation::*;

fn noon(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()
}

// ── Same-day idempotence ─────────────────────────────────────────────────

#[test]
fn same_day_depreciate_is_noop() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 5, 0).unwrap();
    let mut v = DecliningValuation::with_value(3.0, start);
    let before = v;

    assert!(!v.depreciate(start + Duration::hours(23)));
    assert_eq!(v, before);
}

#[test]
fn bounded_same_day_depreciate_is_noop() {
    let mut b = BoundedDecliningValuation::with_values(1.2, 2.0, noon(1));
    let before = b;

    assert!(!b.depreciate_all(noon(1) + Duration::hours(11)));
    assert_eq!(b, before);
}

// ── Calendar-day decay ───────────────────────────────────────────────────

#[test]
fn one_day_decays_by_retention() {
    let mut v = DecliningValuation::with_value(1.0, noon(1));
    assert!(v.depreciate(noon(2)));
    assert!((v.value() - 0.99).abs() < 1e-12);
    assert_eq!(v.changed(), noon(2));
}

#[test]
fn short_interval_across_midnight_still_decays() {
    let late = Utc.with_ymd_and_hms(2024, 5, 1, 23, 50, 0).unwrap();
    let early = Utc.with_ymd_and_hms(2024, 5, 2, 0, 10, 0).unwrap();
    let mut v = DecliningValuation::with_value(2.0, late);
    assert!(v.depreciate(early));
    assert!((v.value() - 1.98).abs() < 1e-12);
}

#[test]
fn several_days_compound() {
    let mut v = DecliningValuation::with_value(10.0, noon(1));
    v.depreciate(noon(11));
    assert!((v.value() - 10.0 * 0.99f64.powi(10)).abs() < 1e-9);
}

#[test]
fn custom_retention_is_used() {
    let mut v = DecliningValuation::with_value(1.0, noon(1));
    v.depreciate_with(noon(3), 0.5);
    assert!((v.value() - 0.25).abs() < 1e-12);
}

#[test]
fn earlier_now_never_grows_value() {
    let mut v = DecliningValuation::with_value(1.0, noon(10));
    assert!(!v.depreciate(noon(3)));
    assert_eq!(v.value(), 1.0);
    assert_eq!(v.changed(), noon(10));
}

#[test]
fn increment_keeps_timestamp() {
    let mut v = DecliningValuation::new(noon(1));
    v.increment(1.0);
    v.increment(1.0);
    assert_eq!(v.value(), 2.0);
    assert_eq!(v.changed(), noon(1));
}

// ── Bounded valuation ────────────────────────────────────────────────────

#[test]
fn empty_bound_is_undefined() {
    let b = BoundedDecliningValuation::new(noon(1));
    assert_eq!(b.normalized_ratio(), None);
}

#[test]
fn ratio_is_weighted_average() {
    let mut b = BoundedDecliningValuation::new(noon(1));
    b.accumulate(0.8, 1.0);
    assert_eq!(b.normalized_ratio(), Some(0.8));
    b.accumulate(0.4, 1.0);
    let ratio = b.normalized_ratio().unwrap();
    assert!((ratio - 0.6).abs() < 1e-12);
}

#[test]
fn decay_scales_value_and_bound_together() {
    let mut b = BoundedDecliningValuation::with_values(1.5, 2.0, noon(1));
    let ratio = b.normalized_ratio().unwrap();
    b.depreciate_all(noon(8));

    let factor = 0.99f64.powi(7);
    assert!((b.value() - 1.5 * factor).abs() < 1e-12);
    assert!((b.bound() - 2.0 * factor).abs() < 1e-12);
    assert!((b.normalized_ratio().unwrap() - ratio).abs() < 1e-12);
    assert_eq!(b.changed(), noon(8));
}

#[test]
fn decayed_history_weighs_less_than_fresh_review() {
    let mut b = BoundedDecliningValuation::new(noon(1));
    b.accumulate(0.0, 1.0);
    b.depreciate_all(noon(31));
    b.accumulate(1.0, 1.0);
    // (0 + 1) / (0.99^30 + 1) > 0.5
    assert!(b.normalized_ratio().unwrap() > 0.5);
}

// ── Properties ───────────────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decay_never_grows_value(value in 0.0f64..1e6, days in -30i64..400) {
            let mut v = DecliningValuation::with_value(value, noon(1));
            v.depreciate(noon(1) + Duration::days(days));
            prop_assert!(v.value() <= value);
        }

        #[test]
        fn bounded_ratio_survives_decay(value in 0.0f64..50.0, extra in 0.0f64..50.0, days in 1i64..400) {
            let bound = value + extra + 1.0;
            let mut b = BoundedDecliningValuation::with_values(value, bound, noon(1));
            let before = b.normalized_ratio().unwrap();
            b.depreciate_all(noon(1) + Duration::days(days));
            let after = b.normalized_ratio().unwrap();
            prop_assert!((before - after).abs() < 1e-9);
        }

        #[test]
        fn zero_bound_is_never_a_score(value in -10.0f64..10.0) {
            let b = BoundedDecliningValuation::with_values(value, 0.0, noon(1));
            prop_assert_eq!(b.normalized_ratio(), None);
        }
    }
}
