pub mod config;
pub mod error;
pub mod types;
pub mod request;
pub mod update_expression;
pub mod store;
pub mod students;
pub mod response;

use std::sync::Arc;
use store::StudentStore;

/// Shared application state
pub struct AppState {
    pub store: Box<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: impl StudentStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}
