use crate::error::ApiError;
use crate::services::auth_service::LoginRequest;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateSessionBody {
    pub email: String,
    pub password: String,
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionBody>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .auth_service
        .authenticate(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(session))
}
