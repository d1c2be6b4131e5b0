//! Direct catalog and review handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use folio_http::error::AppError;

use super::models::{AddReview, Book, RemoveReviews, Review};
use super::BooksCtx;
use crate::error::FolioError;
use crate::extract::{body_or_default, present};

pub async fn list_books(State(ctx): State<BooksCtx>) -> Json<Vec<Book>> {
    Json(ctx.state.catalog.all().await)
}

pub async fn book_by_isbn(
    State(ctx): State<BooksCtx>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(ctx.state.catalog.find_by_isbn(&isbn).await?))
}

pub async fn books_by_author(
    State(ctx): State<BooksCtx>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(ctx.state.catalog.find_by_author(&author).await?))
}

pub async fn books_by_title(
    State(ctx): State<BooksCtx>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(ctx.state.catalog.find_by_title(&title).await?))
}

pub async fn book_reviews(
    State(ctx): State<BooksCtx>,
    Path(isbn): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(ctx.state.catalog.reviews(&isbn).await?))
}

/// Append a freeform review; never replaces an earlier one by the same user.
pub async fn add_review(
    State(ctx): State<BooksCtx>,
    Path(isbn): Path<String>,
    body: Result<Json<AddReview>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let AddReview { username, review } = body_or_default(body);
    let (Some(username), Some(review)) = (present(username), present(review)) else {
        return Err(FolioError::MissingReview.into());
    };

    ctx.state
        .catalog
        .add_review(&isbn, Review::freeform(username.as_str(), review), &ctx.state.users)
        .await?;

    tracing::info!(%isbn, %username, "review added");
    Ok("Review added")
}

pub async fn delete_reviews(
    State(ctx): State<BooksCtx>,
    Path(isbn): Path<String>,
    body: Result<Json<RemoveReviews>, JsonRejection>,
) -> Result<&'static str, AppError> {
    // A missing username is never registered, so it fails as unauthorized
    let username = body_or_default(body).username.unwrap_or_default();

    let removed = ctx
        .state
        .catalog
        .remove_reviews_by(&isbn, &username, &ctx.state.users)
        .await?;

    tracing::info!(%isbn, %username, removed, "reviews deleted");
    Ok("Review deleted")
}
