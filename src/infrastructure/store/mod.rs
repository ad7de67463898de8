//! Entity store infrastructure
//!
//! In-memory implementation of the entity store and the seed fixtures used
//! to populate it at startup.

mod in_memory;
mod seed;

pub use in_memory::InMemoryEntityStore;
pub use seed::{SeedData, SeedError, SeedSummary};
