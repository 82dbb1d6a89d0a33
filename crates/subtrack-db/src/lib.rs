//! Subtrack DB - Subscription store
//!
//! SQLx-based storage layer for the subscription tracker.
//!
//! # Example
//!
//! ```rust,ignore
//! use subtrack_db::{
//!     create_pool, run_migrations, PgSubscriptionRepository, PoolOptions, SubscriptionReader,
//! };
//!
//! let pool = create_pool("postgres://localhost/subtrack", PoolOptions::default()).await?;
//! run_migrations(&pool).await?;
//! let subscriptions = PgSubscriptionRepository::new(pool);
//!
//! let rows = subscriptions.find_by_user_id(user_id).await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::PgSubscriptionRepository;
pub use pool::{create_pool, run_migrations, DbPool, PoolOptions};
pub use repo::*;
