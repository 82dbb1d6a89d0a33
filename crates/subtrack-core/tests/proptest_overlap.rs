//! Property-based tests for window overlap
//!
//! The closed-form overlap test is checked against a day-by-day scan over a
//! bounded calendar, with open ends clamped to the calendar's last day.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use subtrack_core::overlaps;
use subtrack_types::{Subscription, SubscriptionId, UserId};

const HORIZON_DAYS: i64 = 120;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
}

/// An interval inside the horizon, optionally open-ended
fn arb_interval() -> impl Strategy<Value = (i64, Option<i64>)> {
    (0..HORIZON_DAYS).prop_flat_map(|start| {
        (
            Just(start),
            proptest::option::of(start..HORIZON_DAYS),
        )
    })
}

fn active_on(start: i64, end: Option<i64>, d: i64) -> bool {
    start <= d && d <= end.unwrap_or(HORIZON_DAYS)
}

proptest! {
    /// Property: overlap holds exactly when some day is in both intervals
    #[test]
    fn prop_overlap_matches_day_scan(
        (sub_start, sub_end) in arb_interval(),
        (q_start, q_end) in arb_interval(),
    ) {
        let sub = Subscription {
            id: SubscriptionId::new(),
            user_id: UserId::new(),
            service_name: "A".to_string(),
            price: 1,
            start_date: day(sub_start),
            end_date: sub_end.map(day),
        };

        let scanned = (0..=HORIZON_DAYS)
            .any(|d| active_on(sub_start, sub_end, d) && active_on(q_start, q_end, d));

        prop_assert_eq!(overlaps(&sub, day(q_start), q_end.map(day)), scanned);
    }
}
