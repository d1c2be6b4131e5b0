use std::sync::Arc;

use crate::modules::books::store::CatalogStore;
use crate::modules::users::store::UserStore;

/// Shared stores handed to every module. Cloning shares the same stores.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new(catalog: CatalogStore, users: UserStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            users: Arc::new(users),
        }
    }

    /// Seeded catalog, no users.
    pub fn seeded() -> Self {
        Self::new(CatalogStore::seeded(), UserStore::new())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}
