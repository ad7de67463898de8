//! API middleware components

pub mod authorize;
pub mod logging;
pub mod metrics;

pub use authorize::{authorize, AuthenticatedUser, RESOURCE_PARAM};
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;

use axum::{extract::MatchedPath, http::Request};

/// Route pattern for logs and metric labels; raw paths would leak
/// repository names into label values.
pub(crate) fn route_label<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}
