//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use subtrack_types::{Subscription, SubscriptionId, UserId};

/// Subscription row from the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SubscriptionRow {
    pub id: Uuid,
    pub service_name: String,
    pub price: i32,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl SubscriptionRow {
    /// Convert to domain SubscriptionId
    pub fn subscription_id(&self) -> SubscriptionId {
        SubscriptionId(self.id)
    }

    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.user_id)
    }
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Self {
            id: row.subscription_id(),
            user_id: row.user_id(),
            service_name: row.service_name,
            price: row.price,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}
