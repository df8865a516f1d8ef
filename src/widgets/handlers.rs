//! Static file routes for widget images
//!
//! Widgets reference product images by URL; those are plain files served
//! from a local directory under `/static`.

use super::state::SharedState;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// URL prefix for static widget files
pub const STATIC_PREFIX: &str = "/static";

/// Creates the `/static` route when a directory is configured
pub fn routes(static_dir: Option<&Path>) -> Router<SharedState> {
    let Some(dir) = static_dir else {
        return Router::new();
    };

    if !dir.is_dir() {
        warn!("Static directory {:?} does not exist, {} will 404", dir, STATIC_PREFIX);
    } else {
        info!("Serving {:?} under {}", dir, STATIC_PREFIX);
    }

    Router::new().nest_service(STATIC_PREFIX, ServeDir::new(dir))
}
