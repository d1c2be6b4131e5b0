pub mod handlers;
pub mod models;
pub mod store;

use async_trait::async_trait;
use axum::{routing::post, Router};
use folio_kernel::{InitCtx, Module};
use serde_json::json;

use super::openapi::{json_body, text_response};
use crate::state::AppState;

/// Registration and login
pub struct UsersModule {
    state: AppState,
}

impl UsersModule {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "users module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/register", post(handlers::register))
            .route("/login", post(handlers::login))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/register": {
                    "post": {
                        "summary": "Register a user",
                        "tags": ["Users"],
                        "requestBody": json_body("Credentials"),
                        "responses": {
                            "200": text_response("User registered successfully"),
                            "400": text_response("Username and password required, or User already exists")
                        }
                    }
                },
                "/login": {
                    "post": {
                        "summary": "Check a username/password pair",
                        "tags": ["Users"],
                        "requestBody": json_body("Credentials"),
                        "responses": {
                            "200": text_response("Login successful"),
                            "400": text_response("Invalid credentials")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Credentials": {
                        "type": "object",
                        "properties": {
                            "username": { "type": "string" },
                            "password": { "type": "string" }
                        },
                        "required": ["username", "password"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let registered = self.state.users.len().await;
        tracing::info!(module = self.name(), registered, "users module stopped");
        Ok(())
    }
}

/// Create a new instance of the users module
pub fn create_module(state: AppState) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(UsersModule::new(state))
}
