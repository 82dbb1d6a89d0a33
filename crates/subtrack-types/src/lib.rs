//! Subtrack Types - Shared domain types
//!
//! This crate contains domain types used across the subscription tracker:
//! - User and subscription identities
//! - Subscription records and the caller-supplied drafts they are built from
//! - Cost aggregation queries and results
//! - Pure validation of records and queries

pub mod aggregation;
pub mod error;
pub mod id;
pub mod subscription;
pub mod validation;

pub use aggregation::*;
pub use error::*;
pub use id::*;
pub use subscription::*;
pub use validation::{validate_aggregation_query, validate_subscription};
