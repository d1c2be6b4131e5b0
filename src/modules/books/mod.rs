pub mod deferred;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;

use std::time::Duration;

use async_trait::async_trait;
use axum::{routing::get, Router};
use folio_kernel::{InitCtx, Module};
use serde_json::json;

use super::openapi::{json_body, path_param, text_response};
use crate::state::AppState;

/// Router state for the books module
#[derive(Debug, Clone)]
pub struct BooksCtx {
    pub state: AppState,
    /// Latency of `/async/books`
    pub async_delay: Duration,
}

/// Catalog queries, review mutation, and the async/promise read variants
pub struct BooksModule {
    ctx: BooksCtx,
}

impl BooksModule {
    pub fn new(state: AppState, async_delay: Duration) -> Self {
        Self {
            ctx: BooksCtx { state, async_delay },
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let books = self.ctx.state.catalog.all().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = books.len(),
            async_delay_ms = self.ctx.async_delay.as_millis() as u64,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/books", get(handlers::list_books))
            .route("/books/isbn/{isbn}", get(handlers::book_by_isbn))
            .route("/books/author/{author}", get(handlers::books_by_author))
            .route("/books/title/{title}", get(handlers::books_by_title))
            .route(
                "/books/{isbn}/review",
                get(handlers::book_reviews)
                    .post(handlers::add_review)
                    .delete(handlers::delete_reviews),
            )
            .route("/async/books", get(deferred::list_books_delayed))
            .route(
                "/promise/books/isbn/{isbn}",
                get(deferred::promised_book_by_isbn),
            )
            .route(
                "/promise/books/author/{author}",
                get(deferred::promised_books_by_author),
            )
            .route(
                "/promise/books/title/{title}",
                get(deferred::promised_books_by_title),
            )
            .with_state(self.ctx.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book_list = json!({
            "description": "Matching books",
            "content": { "application/json": { "schema": {
                "type": "array",
                "items": { "$ref": "#/components/schemas/Book" }
            } } }
        });
        let one_book = json!({
            "description": "The book",
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Book" } } }
        });
        let review_list = json!({
            "description": "Reviews, possibly empty",
            "content": { "application/json": { "schema": {
                "type": "array",
                "items": { "$ref": "#/components/schemas/Review" }
            } } }
        });

        Some(json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": { "200": book_list }
                    }
                },
                "/books/isbn/{isbn}": {
                    "get": {
                        "summary": "Get book by ISBN",
                        "tags": ["Books"],
                        "parameters": [path_param("isbn")],
                        "responses": { "200": one_book, "404": text_response("Book not found") }
                    }
                },
                "/books/author/{author}": {
                    "get": {
                        "summary": "Books by author (case-insensitive exact match)",
                        "tags": ["Books"],
                        "parameters": [path_param("author")],
                        "responses": {
                            "200": book_list,
                            "404": text_response("No books found for this author")
                        }
                    }
                },
                "/books/title/{title}": {
                    "get": {
                        "summary": "Books by title (case-insensitive substring)",
                        "tags": ["Books"],
                        "parameters": [path_param("title")],
                        "responses": {
                            "200": book_list,
                            "404": text_response("No books found for this title")
                        }
                    }
                },
                "/books/{isbn}/review": {
                    "get": {
                        "summary": "Reviews of a book",
                        "tags": ["Reviews"],
                        "parameters": [path_param("isbn")],
                        "responses": { "200": review_list, "404": text_response("Book not found") }
                    },
                    "post": {
                        "summary": "Add a review (registered users only)",
                        "tags": ["Reviews"],
                        "parameters": [path_param("isbn")],
                        "requestBody": json_body("AddReview"),
                        "responses": {
                            "200": text_response("Review added"),
                            "400": text_response("Username and review required"),
                            "401": text_response("Unauthorized user"),
                            "404": text_response("Book not found")
                        }
                    },
                    "delete": {
                        "summary": "Delete every review by a user",
                        "tags": ["Reviews"],
                        "parameters": [path_param("isbn")],
                        "requestBody": json_body("RemoveReviews"),
                        "responses": {
                            "200": text_response("Review deleted"),
                            "401": text_response("Unauthorized user"),
                            "404": text_response("Book not found")
                        }
                    }
                },
                "/async/books": {
                    "get": {
                        "summary": "List books after a fixed delay",
                        "tags": ["Async"],
                        "responses": {
                            "200": book_list,
                            "500": text_response("Error fetching books")
                        }
                    }
                },
                "/promise/books/isbn/{isbn}": {
                    "get": {
                        "summary": "Get book by ISBN (deferred)",
                        "tags": ["Async"],
                        "parameters": [path_param("isbn")],
                        "responses": { "200": one_book, "404": text_response("Book not found") }
                    }
                },
                "/promise/books/author/{author}": {
                    "get": {
                        "summary": "Books by author (deferred)",
                        "tags": ["Async"],
                        "parameters": [path_param("author")],
                        "responses": {
                            "200": book_list,
                            "404": text_response("No books found for this author")
                        }
                    }
                },
                "/promise/books/title/{title}": {
                    "get": {
                        "summary": "Books by title (deferred)",
                        "tags": ["Async"],
                        "parameters": [path_param("title")],
                        "responses": {
                            "200": book_list,
                            "404": text_response("No books found for this title")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "ISBN": { "type": "string" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "review": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Review" }
                            },
                            "username": {
                                "type": "string",
                                "description": "Username associated with the listing"
                            }
                        },
                        "required": ["ISBN", "title", "author", "review", "username"]
                    },
                    "Review": {
                        "type": "object",
                        "description": "Either free text (`review`) or a seeded score (`rating` + `comment`)",
                        "properties": {
                            "username": { "type": "string" },
                            "review": { "type": "string" },
                            "rating": { "type": "integer" },
                            "comment": { "type": "string" }
                        },
                        "required": ["username"]
                    },
                    "AddReview": {
                        "type": "object",
                        "properties": {
                            "username": { "type": "string" },
                            "review": { "type": "string" }
                        },
                        "required": ["username", "review"]
                    },
                    "RemoveReviews": {
                        "type": "object",
                        "properties": { "username": { "type": "string" } },
                        "required": ["username"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(state: AppState, async_delay: Duration) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(state, async_delay))
}
