// Request identity for protected routes.
//
// The bearer key resolves to a user id; course ownership checks happen in the
// handlers that need them.

pub mod auth;
pub mod middleware;

pub use auth::{ApiKeyAuth, RequestUser};
pub use middleware::require_user;
