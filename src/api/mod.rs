//! API layer - registry surface, probes and middleware

pub mod health;
pub mod middleware;
pub mod registry;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::AuthenticatedUser;
pub use router::{create_app, create_router_with_state};
pub use state::AppState;
