pub mod books;
pub mod openapi;
pub mod users;

use std::time::Duration;

use folio_kernel::{settings::Settings, ModuleRegistry};

use crate::state::AppState;

/// Register every feature module against one shared state
pub fn register_all(registry: &mut ModuleRegistry, state: &AppState, settings: &Settings) {
    registry.register(books::create_module(
        state.clone(),
        Duration::from_millis(settings.catalog.async_delay_ms),
    ));
    registry.register(users::create_module(state.clone()));
}
