//! Team domain module
//!
//! Teams belong to one organization and carry an ordered list of privilege
//! references. Each privilege grants read or read-write access to a single
//! repository in that organization's namespace.

mod entity;
mod privilege;

pub use entity::{Team, TeamId};
pub use privilege::{GrantLevel, Privilege, PrivilegeId};
