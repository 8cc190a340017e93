use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use venue_core::venue::*;
use venue_ingest::IngestionEngine;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
}

fn arb_policy() -> impl Strategy<Value = SmokingPolicy> {
    prop_oneof![
        Just(SmokingPolicy::Allowed),
        Just(SmokingPolicy::Prohibited),
        Just(SmokingPolicy::Partial),
    ]
}

fn arb_review() -> impl Strategy<Value = Review> {
    (
        proptest::option::of(arb_policy()),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(0.0f64..=1.0),
    )
        .prop_filter("at least one field", |(p, s, n)| {
            p.is_some() || s.is_some() || n.is_some()
        })
        .prop_map(|(smoking_policy, air_quality_smokers, air_quality_nonsmokers)| Review {
            smoking_policy,
            air_quality_smokers,
            air_quality_nonsmokers,
        })
}

/// Reviews paired with a day offset (non-decreasing after sorting) and an hour.
fn arb_history() -> impl Strategy<Value = Vec<(i64, i64, Review)>> {
    proptest::collection::vec((0i64..60, 0i64..24, arb_review()), 1..25).prop_map(|mut v| {
        v.sort_by_key(|(day, hour, _)| (*day, *hour));
        v
    })
}

fn replay(history: &[(i64, i64, Review)]) -> VenueRecord {
    let engine = IngestionEngine::new();
    let mut record = VenueRecord::reset(VenueKey::parse("prop").unwrap(), start());
    for (day, hour, review) in history {
        let now = start() + Duration::days(*day) + Duration::hours(*hour);
        record = engine.ingest_review(&record, review, now).unwrap();
    }
    record
}

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(history in arb_history()) {
        let record = replay(&history);
        for score in [record.air_quality_smokers(), record.air_quality_nonsmokers()] {
            if let Some(v) = score.value() {
                prop_assert!((-1e-9..=1.0 + 1e-9).contains(&v), "score {} out of range", v);
            }
        }
    }

    #[test]
    fn vote_derives_policy_from_counters(mut history in arb_history(), policy in arb_policy()) {
        let last_day = history.last().map(|(d, _, _)| *d).unwrap_or(0);
        history.push((last_day, 23, Review::new().with_policy(policy)));
        let record = replay(&history);
        prop_assert_eq!(record.smoking_policy(), record.vote_tally().leader());
    }

    #[test]
    fn scores_mirror_accumulators(history in arb_history()) {
        let record = replay(&history);
        prop_assert_eq!(record.air_quality_smokers().value(), record.smokers_accumulator().normalized_ratio());
        prop_assert_eq!(record.air_quality_nonsmokers().value(), record.nonsmokers_accumulator().normalized_ratio());
    }

    #[test]
    fn same_day_decay_is_identity(history in arb_history(), hour in 0i64..24) {
        let mut record = replay(&history);
        let last_day = history.last().map(|(d, _, _)| *d).unwrap_or(0);
        let same_day = start() + Duration::days(last_day) + Duration::hours(hour);
        let before = record.clone();
        record.depreciate_all(same_day);
        prop_assert_eq!(record, before);
    }

    #[test]
    fn pure_decay_preserves_ratios(history in arb_history(), days in 1i64..400) {
        let mut record = replay(&history);
        let ratio = record.nonsmokers_accumulator().normalized_ratio();
        let later = start() + Duration::days(61 + days);
        record.depreciate_all(later);

        match (ratio, record.nonsmokers_accumulator().normalized_ratio()) {
            (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-9),
            (None, None) => {}
            other => prop_assert!(false, "definedness changed: {:?}", other),
        }
    }

    #[test]
    fn reingesting_is_deterministic(history in arb_history()) {
        prop_assert_eq!(replay(&history), replay(&history));
    }
}
