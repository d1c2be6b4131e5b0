//! Catalog reads exposed through the delayed-callback and deferred-value idioms.
//!
//! Results are identical to the direct handlers; only completion differs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    Json,
};
use folio_http::error::AppError;
use tokio::sync::oneshot;

use super::models::Book;
use super::store::CatalogStore;
use super::BooksCtx;
use crate::error::FolioError;

/// Read the whole catalog after `delay`, then hand the outcome to `done`.
pub fn fetch_books_later<F>(catalog: Arc<CatalogStore>, delay: Duration, done: F)
where
    F: FnOnce(Result<Vec<Book>, FolioError>) + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        done(Ok(catalog.all().await));
    });
}

pub fn find_book_by_isbn(
    catalog: Arc<CatalogStore>,
    isbn: String,
) -> impl Future<Output = Result<Book, FolioError>> + Send {
    async move { catalog.find_by_isbn(&isbn).await }
}

pub fn find_books_by_author(
    catalog: Arc<CatalogStore>,
    author: String,
) -> impl Future<Output = Result<Vec<Book>, FolioError>> + Send {
    async move { catalog.find_by_author(&author).await }
}

pub fn find_books_by_title(
    catalog: Arc<CatalogStore>,
    title: String,
) -> impl Future<Output = Result<Vec<Book>, FolioError>> + Send {
    async move { catalog.find_by_title(&title).await }
}

pub async fn list_books_delayed(State(ctx): State<BooksCtx>) -> Result<Json<Vec<Book>>, AppError> {
    let (tx, rx) = oneshot::channel();
    fetch_books_later(Arc::clone(&ctx.state.catalog), ctx.async_delay, move |outcome| {
        let _ = tx.send(outcome);
    });

    match rx.await {
        Ok(Ok(books)) => Ok(Json(books)),
        Ok(Err(err)) => Err(AppError::Internal(
            anyhow!(err).context("Error fetching books"),
        )),
        Err(_) => Err(AppError::Internal(anyhow!("Error fetching books"))),
    }
}

pub async fn promised_book_by_isbn(
    State(ctx): State<BooksCtx>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, AppError> {
    find_book_by_isbn(Arc::clone(&ctx.state.catalog), isbn)
        .await
        .map(Json)
        .map_err(rejected)
}

pub async fn promised_books_by_author(
    State(ctx): State<BooksCtx>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, AppError> {
    find_books_by_author(Arc::clone(&ctx.state.catalog), author)
        .await
        .map(Json)
        .map_err(rejected)
}

pub async fn promised_books_by_title(
    State(ctx): State<BooksCtx>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, AppError> {
    find_books_by_title(Arc::clone(&ctx.state.catalog), title)
        .await
        .map(Json)
        .map_err(rejected)
}

/// Every rejection of a deferred lookup is reported as 404.
fn rejected(err: FolioError) -> AppError {
    AppError::not_found(err.to_string())
}
