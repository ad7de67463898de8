//! Organization domain module
//!
//! An organization is a shared namespace. Ownership comes from a user's
//! organization membership; finer access comes from team privileges.

mod entity;

pub use entity::{Organization, OrganizationId};
