//! REST API handlers

pub mod health;
pub mod shared;
pub mod subscription;
pub mod sum;

pub use health::*;
pub use subscription::*;
pub use sum::*;
