//! Infrastructure layer - store implementations, hashing, logging and metrics

pub mod logging;
pub mod observability;
pub mod store;
pub mod user;
