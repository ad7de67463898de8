//! Image repository domain module

mod entity;

pub use entity::{Repository, RepositoryKey, RepositoryKeyError};
