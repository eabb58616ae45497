use std::sync::Arc;

use crate::config::ServerConfig;
use crate::extract::TextExtractor;

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Arc<ServerConfig>,
}
