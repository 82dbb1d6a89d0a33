//! Common test utilities for subtrack-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::{date, draft, MockSubscriptionRepository};
