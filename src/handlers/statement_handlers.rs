use crate::auth::middleware::AuthUser;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateStatementBody {
    pub amount: Decimal,
    pub description: String,
}

pub async fn create_deposit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateStatementBody>,
) -> Result<impl IntoResponse, ApiError> {
    let statement = state
        .statement_service
        .deposit(auth_user.user_id, body.amount, &body.description)
        .await?;

    Ok((StatusCode::CREATED, Json(statement)))
}

pub async fn create_withdrawal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateStatementBody>,
) -> Result<impl IntoResponse, ApiError> {
    let statement = state
        .statement_service
        .withdraw(auth_user.user_id, body.amount, &body.description)
        .await?;

    Ok((StatusCode::CREATED, Json(statement)))
}

pub async fn show_balance(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let sheet = state.statement_service.balance(auth_user.user_id).await?;
    Ok(Json(sheet))
}

pub async fn show_statement(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(statement_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let statement = state
        .statement_service
        .statement(auth_user.user_id, statement_id)
        .await?;

    Ok(Json(statement))
}
