//! Property-based tests for subscription and query validation
//!
//! - Any end date before the start date is rejected
//! - Any well-formed record is accepted and keeps its fields
//! - Query windows follow the same ordering rule

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use subtrack_types::{
    validate_aggregation_query, validate_subscription, AggregationQuery, DateInput,
    SubscriptionDraft, UserId, ValidationError,
};

// ============================================================================
// Strategies
// ============================================================================

/// Dates between 2000-01-01 and roughly 2060
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..22_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days)
    })
}

fn arb_service_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,30}"
}

fn draft(
    service_name: String,
    price: i64,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> SubscriptionDraft {
    SubscriptionDraft {
        user_id: UserId::new(),
        service_name,
        price,
        start_date: Some(DateInput::Date(start)),
        end_date: end.map(DateInput::Date),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: a record whose end precedes its start never validates
    #[test]
    fn prop_end_before_start_rejected(
        start in arb_date(),
        gap in 1i64..5_000,
        name in arb_service_name(),
        price in 1i64..1_000_000,
    ) {
        let end = start - Duration::days(gap);
        let result = validate_subscription(&draft(name, price, start, Some(end)));
        prop_assert_eq!(result, Err(ValidationError::EndBeforeStart { start, end }));
    }

    /// Property: a well-formed record validates and keeps its attributes
    #[test]
    fn prop_well_formed_record_accepted(
        start in arb_date(),
        span in proptest::option::of(0i64..5_000),
        name in arb_service_name(),
        price in 1i64..=i64::from(i32::MAX),
    ) {
        let end = span.map(|d| start + Duration::days(d));
        let d = draft(name.clone(), price, start, end);
        let sub = validate_subscription(&d).unwrap();

        prop_assert_eq!(sub.user_id, d.user_id);
        prop_assert_eq!(sub.service_name, name);
        prop_assert_eq!(i64::from(sub.price), price);
        prop_assert_eq!(sub.start_date, start);
        prop_assert_eq!(sub.end_date, end);
    }

    /// Property: query windows follow the same ordering rule as records
    #[test]
    fn prop_query_window_ordering(
        start in arb_date(),
        offset in -5_000i64..5_000,
    ) {
        let end = start + Duration::days(offset);
        let query = AggregationQuery {
            user_id: UserId::new(),
            service_name: "Netflix".to_string(),
            start_date: start,
            end_date: Some(end),
        };
        prop_assert_eq!(validate_aggregation_query(&query).is_ok(), offset >= 0);
    }
}
