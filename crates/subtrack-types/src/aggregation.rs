//! Cost aggregation types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Total-spend query for one user and one service over a date window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationQuery {
    /// User whose subscriptions are summed
    pub user_id: UserId,
    /// Exact, case-sensitive service name filter
    pub service_name: String,
    /// Inclusive lower bound of the window
    pub start_date: NaiveDate,
    /// Inclusive upper bound, `None` for an unbounded window
    pub end_date: Option<NaiveDate>,
}

/// Total price of the subscriptions matching an [`AggregationQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub user_id: UserId,
    pub total_price: i64,
}
