//! folio: an in-memory bookstore catalog and review service.
//!
//! Books are seeded at startup and never added or removed; users register
//! and may then add or delete reviews. Nothing is persisted.
#![recursion_limit = "256"]

pub mod error;
pub mod extract;
pub mod modules;
pub mod state;

use anyhow::Context;
use folio_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub use error::FolioError;
pub use state::AppState;

/// Build a registry holding every module, all sharing `state`
pub fn build_registry(state: &AppState, settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, state, settings);
    registry
}

/// Run the service until a shutdown signal arrives
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let state = AppState::seeded();
    let registry = build_registry(&state, &settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = folio_http::start_server(&registry, &settings)
        .await
        .context("server terminated with an error");

    registry.stop_all().await?;
    served
}
