use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use folio_http::error::AppError;

use super::models::Credentials;
use crate::error::FolioError;
use crate::extract::{body_or_default, present};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Credentials { username, password } = body_or_default(body);
    let (Some(username), Some(password)) = (present(username), present(password)) else {
        return Err(FolioError::MissingCredentials.into());
    };

    state.users.register(&username, &password).await?;

    tracing::info!(%username, "user registered");
    Ok("User registered successfully")
}

/// Checks credentials only; nothing is issued on success.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Credentials { username, password } = body_or_default(body);
    let (Some(username), Some(password)) = (username, password) else {
        return Err(FolioError::InvalidCredentials.into());
    };

    state.users.verify(&username, &password).await?;

    tracing::info!(%username, "login succeeded");
    Ok("Login successful")
}
