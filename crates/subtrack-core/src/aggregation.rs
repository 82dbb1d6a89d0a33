//! Cost aggregation
//!
//! A subscription counts toward a window when its active interval
//! `[start, end or +inf]` intersects `[query.start, query.end or +inf]`,
//! boundary days included. Each matching subscription contributes its full
//! price; overlap length is not prorated.

use std::sync::Arc;

use chrono::NaiveDate;
use subtrack_db::SubscriptionReader;
use subtrack_types::{
    validate_aggregation_query, AggregationQuery, AggregationResult, Subscription,
};
use tracing::instrument;

use crate::SubscriptionError;

/// Whether a subscription is active at any point in `[start, end]`.
///
/// `None` on either end means unbounded.
pub fn overlaps(sub: &Subscription, start: NaiveDate, end: Option<NaiveDate>) -> bool {
    let began_in_time = end.map_or(true, |end| sub.start_date <= end);
    let still_active = sub.end_date.map_or(true, |sub_end| sub_end >= start);
    began_in_time && still_active
}

/// Sum the prices of the subscriptions that match a query.
///
/// Does not validate the query.
pub fn total_price<'a, I>(subs: I, query: &AggregationQuery) -> i64
where
    I: IntoIterator<Item = &'a Subscription>,
{
    subs.into_iter()
        .filter(|sub| sub.service_name == query.service_name)
        .filter(|sub| overlaps(sub, query.start_date, query.end_date))
        .map(|sub| i64::from(sub.price))
        .sum()
}

/// Aggregation engine
///
/// Holds only read access to the store.
pub struct AggregationEngine<R: ?Sized> {
    reader: Arc<R>,
}

impl<R: SubscriptionReader + ?Sized> AggregationEngine<R> {
    /// Create a new aggregation engine
    pub fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }

    /// Total price of a user's subscriptions to one service within a window
    #[instrument(
        skip(self, query),
        fields(user_id = %query.user_id, service_name = %query.service_name)
    )]
    pub async fn sum(
        &self,
        query: &AggregationQuery,
    ) -> Result<AggregationResult, SubscriptionError> {
        validate_aggregation_query(query)?;

        let rows = self
            .reader
            .find_by_user_id(query.user_id.0)
            .await
            .map_err(SubscriptionError::store("sum", query.user_id))?;

        let subs: Vec<Subscription> = rows.into_iter().map(Subscription::from).collect();
        let total_price = total_price(&subs, query);

        tracing::debug!(candidates = subs.len(), total_price, "Subscriptions summed");

        Ok(AggregationResult {
            user_id: query.user_id,
            total_price,
        })
    }
}
