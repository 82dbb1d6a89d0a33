//! Record and query validation
//!
//! Pure checks run before anything reaches the store. Each check
//! short-circuits on the first failure.

use chrono::NaiveDate;

use crate::{AggregationQuery, DateInput, NewSubscription, SubscriptionDraft, ValidationError};

/// Validate a caller-supplied subscription.
///
/// Checks run in order: service name, price, start date, end date.
pub fn validate_subscription(
    draft: &SubscriptionDraft,
) -> Result<NewSubscription, ValidationError> {
    if draft.service_name.is_empty() {
        return Err(ValidationError::EmptyServiceName);
    }

    if draft.price <= 0 {
        return Err(ValidationError::NonPositivePrice);
    }
    let price = i32::try_from(draft.price).map_err(|_| ValidationError::PriceTooLarge)?;

    let start_date = draft
        .start_date
        .and_then(DateInput::date)
        .ok_or(ValidationError::EmptyStartDate)?;

    let end_date = match draft.end_date {
        None => None,
        Some(DateInput::Empty) => return Err(ValidationError::EmptyEndDate),
        Some(DateInput::Date(end)) => {
            check_order(start_date, Some(end))?;
            Some(end)
        }
    };

    Ok(NewSubscription {
        user_id: draft.user_id,
        service_name: draft.service_name.clone(),
        price,
        start_date,
        end_date,
    })
}

/// Validate an aggregation query: non-empty service filter, ordered window.
pub fn validate_aggregation_query(query: &AggregationQuery) -> Result<(), ValidationError> {
    if query.service_name.is_empty() {
        return Err(ValidationError::EmptyServiceName);
    }

    check_order(query.start_date, query.end_date)
}

fn check_order(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(ValidationError::EndBeforeStart { start, end }),
        _ => Ok(()),
    }
}
