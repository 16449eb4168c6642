use crate::error::AuthError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Authenticated token subject, attached as a request extension. Whether the
/// id still resolves to a stored user is decided by the services, not here.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get("authorization")
        .ok_or(AuthError::MissingAuthorizationHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    Ok(auth_header["Bearer ".len()..].to_string())
}

/// Bearer-token middleware for all authenticated routes. Verifies the
/// signature and expiry, then forwards the subject to the handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(&headers)?;
    let user_id = state.jwt_keys.subject(&token)?;

    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}
