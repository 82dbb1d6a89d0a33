//! Mock repositories for testing

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use subtrack_db::{
    CreateSubscription, DbError, DbResult, SubscriptionReader, SubscriptionRepository,
    SubscriptionRow, UpdateSubscription,
};
use subtrack_types::{DateInput, SubscriptionDraft, UserId};
use uuid::Uuid;

/// In-memory subscription repository for testing
#[derive(Default, Clone)]
pub struct MockSubscriptionRepository {
    rows: Arc<DashMap<Uuid, SubscriptionRow>>,
    unavailable: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Snapshot of one row
    pub fn row(&self, id: Uuid) -> Option<SubscriptionRow> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    /// Insert a test row directly, bypassing validation
    pub fn insert_row(
        &self,
        user_id: UserId,
        service_name: &str,
        price: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.rows.insert(
            id,
            SubscriptionRow {
                id,
                service_name: service_name.to_string(),
                price,
                user_id: user_id.0,
                start_date,
                end_date,
            },
        );
        id
    }

    fn enter(&self) -> DbResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl SubscriptionReader for MockSubscriptionRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SubscriptionRow>> {
        self.enter()?;
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<SubscriptionRow>> {
        self.enter()?;
        Ok(self
            .rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.value().clone())
            .collect())
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn create(&self, sub: CreateSubscription) -> DbResult<Uuid> {
        self.enter()?;
        let id = Uuid::new_v4();
        self.rows.insert(
            id,
            SubscriptionRow {
                id,
                service_name: sub.service_name,
                price: sub.price,
                user_id: sub.user_id,
                start_date: sub.start_date,
                end_date: sub.end_date,
            },
        );
        Ok(id)
    }

    async fn update(&self, sub: UpdateSubscription) -> DbResult<SubscriptionRow> {
        self.enter()?;
        let mut row = self.rows.get_mut(&sub.id).ok_or(DbError::NotFound)?;
        row.service_name = sub.service_name;
        row.price = sub.price;
        row.user_id = sub.user_id;
        row.start_date = sub.start_date;
        row.end_date = sub.end_date;
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> DbResult<()> {
        self.enter()?;
        self.rows.remove(&id);
        Ok(())
    }
}

/// Calendar date shorthand
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A valid draft for the given user and service
#[allow(dead_code)]
pub fn draft(
    user_id: UserId,
    service_name: &str,
    price: i64,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> SubscriptionDraft {
    SubscriptionDraft {
        user_id,
        service_name: service_name.to_string(),
        price,
        start_date: Some(DateInput::Date(start)),
        end_date: end.map(DateInput::Date),
    }
}
