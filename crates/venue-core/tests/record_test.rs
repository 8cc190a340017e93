use chrono::{DateTime, Duration, TimeZone, Utc};
use venue_core::venue::*;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
}

fn fresh(now: DateTime<Utc>) -> VenueRecord {
    VenueRecord::reset(VenueKey::parse("ChIJN1t-tDeuEmsRUsoyG83frY4").unwrap(), now)
}

fn vote(policy: SmokingPolicy) -> Review {
    Review::new().with_policy(policy)
}

#[test]
fn reset_has_no_data() {
    let record = fresh(at(1, 9));
    assert_eq!(record.smoking_policy(), SmokingPolicy::Unknown);
    assert!(!record.air_quality_smokers().is_defined());
    assert!(!record.air_quality_nonsmokers().is_defined());
    for policy in SmokingPolicy::VOTABLE {
        let counter = record.counter(policy).unwrap();
        assert_eq!(counter.value(), 0.0);
        assert_eq!(counter.changed(), at(1, 9));
    }
    assert_eq!(record.smokers_accumulator().bound(), 0.0);
    assert_eq!(record.nonsmokers_accumulator().bound(), 0.0);
}

// ── Majority vote ────────────────────────────────────────────────────────

#[test]
fn two_way_tie_is_unknown() {
    let tally = VoteTally {
        allowed: 1.0,
        prohibited: 1.0,
        partial: 0.0,
    };
    assert_eq!(tally.leader(), SmokingPolicy::Unknown);
}

#[test]
fn strict_lead_wins() {
    let tally = VoteTally {
        allowed: 2.0,
        prohibited: 1.0,
        partial: 0.0,
    };
    assert_eq!(tally.leader(), SmokingPolicy::Allowed);
}

#[test]
fn three_way_tie_and_all_zero_are_unknown() {
    for v in [0.0, 1.0] {
        let tally = VoteTally {
            allowed: v,
            prohibited: v,
            partial: v,
        };
        assert_eq!(tally.leader(), SmokingPolicy::Unknown);
    }
}

#[test]
fn partial_can_lead() {
    let tally = VoteTally {
        allowed: 0.5,
        prohibited: 0.99,
        partial: 1.0,
    };
    assert_eq!(tally.leader(), SmokingPolicy::Partial);
}

// ── apply_review ─────────────────────────────────────────────────────────

#[test]
fn vote_sequence_across_days() {
    let mut record = fresh(at(1, 9));

    record.depreciate_all(at(1, 9));
    record.apply_review(&vote(SmokingPolicy::Allowed));
    assert_eq!(record.smoking_policy(), SmokingPolicy::Allowed);

    record.depreciate_all(at(1, 18));
    record.apply_review(&vote(SmokingPolicy::Prohibited));
    assert_eq!(record.smoking_policy(), SmokingPolicy::Unknown);

    record.depreciate_all(at(2, 10));
    record.apply_review(&vote(SmokingPolicy::Allowed));
    let tally = record.vote_tally();
    assert!((tally.allowed - 1.99).abs() < 1e-12);
    assert!((tally.prohibited - 0.99).abs() < 1e-12);
    assert_eq!(tally.partial, 0.0);
    assert_eq!(record.smoking_policy(), SmokingPolicy::Allowed);
}

#[test]
fn nonsmokers_scores_average() {
    let mut record = fresh(at(3, 8));
    record.apply_review(&Review::new().with_nonsmokers(0.8));
    assert_eq!(record.air_quality_nonsmokers().value(), Some(0.8));

    record.apply_review(&Review::new().with_nonsmokers(0.4));
    let score = record.air_quality_nonsmokers().value().unwrap();
    assert!((score - 0.6).abs() < 1e-12);
    assert!(!record.air_quality_smokers().is_defined());
}

#[test]
fn smokers_score_is_independent() {
    let mut record = fresh(at(3, 8));
    record.apply_review(&Review::new().with_smokers(0.2).with_nonsmokers(1.0));
    assert_eq!(record.air_quality_smokers().value(), Some(0.2));
    assert_eq!(record.air_quality_nonsmokers().value(), Some(1.0));
    assert_eq!(record.smoking_policy(), SmokingPolicy::Unknown);
}

#[test]
fn score_only_review_leaves_policy_alone() {
    let mut record = fresh(at(3, 8));
    record.apply_review(&vote(SmokingPolicy::Prohibited));
    record.apply_review(&Review::new().with_smokers(0.5));
    assert_eq!(record.smoking_policy(), SmokingPolicy::Prohibited);
    assert_eq!(record.vote_tally().prohibited, 1.0);
}

#[test]
fn unknown_vote_changes_nothing() {
    let mut record = fresh(at(3, 8));
    let before = record.clone();
    record.apply_review(&vote(SmokingPolicy::Unknown));
    assert_eq!(record, before);
}

#[test]
fn accumulators_age_independently() {
    let mut record = fresh(at(1, 12));
    record.apply_review(&vote(SmokingPolicy::Allowed));
    record.depreciate_all(at(5, 12));
    record.apply_review(&Review::new().with_smokers(1.0));

    let allowed = record.counter(SmokingPolicy::Allowed).unwrap();
    assert!((allowed.value() - 0.99f64.powi(4)).abs() < 1e-12);
    assert_eq!(allowed.changed(), at(5, 12));
    // The empty accumulator decayed too: 0 * factor stays 0, but its clock moved.
    assert_eq!(record.smokers_accumulator().bound(), 1.0);
    assert_eq!(record.smokers_accumulator().changed(), at(5, 12));
}

#[test]
fn same_day_depreciate_leaves_record_identical() {
    let mut record = fresh(at(4, 1));
    record.apply_review(&vote(SmokingPolicy::Partial).with_smokers(0.3));
    let before = record.clone();
    assert_eq!(record.depreciate_all(at(4, 1) + Duration::hours(22)), 0);
    assert_eq!(record, before);
}

#[test]
fn summary_projects_public_fields() {
    let mut record = fresh(at(2, 2));
    record.apply_review(&vote(SmokingPolicy::Allowed).with_nonsmokers(0.7));
    let summary = record.summary();
    assert_eq!(summary.key, *record.key());
    assert_eq!(summary.smoking_policy, SmokingPolicy::Allowed);
    assert_eq!(summary.air_quality_nonsmokers.value(), Some(0.7));
    assert!(!summary.air_quality_smokers.is_defined());
}
