//! Request body helpers.

use axum::{extract::rejection::JsonRejection, Json};

/// Treat an absent or malformed JSON body as an empty object.
pub fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "request body ignored");
            T::default()
        }
    }
}

/// A field counts as present only when it is non-empty.
pub fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
