//! Repository-scoped authorization
//!
//! Decides, before any registry handler runs, whether an authenticated caller
//! may read or write a `namespace/repository` pair. The pipeline is:
//!
//! 1. Resolve the resource path and classify the method ([`ResourcePath`], [`Permission`])
//! 2. Authenticate Basic credentials ([`CredentialGate`])
//! 3. Let legacy v1 image resources through ([`LegacyResourceMatcher`])
//! 4. Walk the ownership hierarchy ([`AuthorizationEngine`])
//!
//! [`AccessGate`] runs the whole pipeline and always produces a [`Decision`].

mod credentials;
mod decision;
mod engine;
mod error;
mod gate;
mod legacy;
mod path;
mod permission;

pub use credentials::{BasicCredentials, CredentialGate};
pub use decision::Decision;
pub use engine::AuthorizationEngine;
pub use error::{AuthzError, DenyReason};
pub use gate::{AccessGate, AccessRequest, DEFAULT_EVALUATION_TIMEOUT};
pub use legacy::{LegacyResourceMatcher, DEFAULT_LEGACY_IMAGE_PATTERN};
pub use path::ResourcePath;
pub use permission::Permission;
