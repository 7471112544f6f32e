use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::auth::ApiKeyAuth;
use crate::errors::AppError;

pub const NOT_AUTHORIZED_MESSAGE: &str = "Not authorized to access this route";

/// Reject requests without a known API key; otherwise attach the
/// [`super::auth::RequestUser`] to the request extensions.
pub async fn require_user(
    State(auth): State<Arc<ApiKeyAuth>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user) = auth.authenticate_headers(request.headers()) else {
        warn!(endpoint = %request.uri().path(), "Authentication failed");
        return Err(AppError::Unauthorized(NOT_AUTHORIZED_MESSAGE.to_string()));
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
