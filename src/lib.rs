pub mod api;
pub mod article;
pub mod config;
pub mod error;
pub mod store;

use std::sync::Arc;
use config::Config;
use store::ArticleStore;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<ArticleStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = ArticleStore::new(config.data_path.clone());
        AppState {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
