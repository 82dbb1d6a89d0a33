//! Subtrack Core - Subscription lifecycle and cost aggregation
//!
//! Validates and persists subscription records through an injected store,
//! and sums what a user spends on a service over a date window.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use subtrack_core::SubscriptionService;
//! use subtrack_db::PgSubscriptionRepository;
//!
//! let service = SubscriptionService::new(Arc::new(PgSubscriptionRepository::new(pool)));
//!
//! let id = service.create(&draft).await?;
//! let total = service.sum(&query).await?.total_price;
//! ```

pub mod aggregation;
pub mod error;
pub mod service;

pub use aggregation::{overlaps, AggregationEngine};
pub use error::SubscriptionError;
pub use service::SubscriptionService;
