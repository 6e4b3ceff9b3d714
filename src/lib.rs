// Library exports for binary tools and tests
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod storage;

use storage::DynStorage;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: DynStorage,
}
