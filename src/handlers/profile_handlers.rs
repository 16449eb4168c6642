use crate::auth::middleware::AuthUser;
use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Extension, Json};

pub async fn show_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.profile(auth_user.user_id).await?;
    Ok(Json(user))
}
