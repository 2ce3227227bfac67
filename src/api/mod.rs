use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod books;
mod error;
mod observability;
mod posts;
mod system;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use crate::services::{BookService, PostService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn book_service(&self) -> &Arc<dyn BookService> {
        &self.shared.book_service
    }

    #[must_use]
    pub fn post_service(&self) -> &Arc<dyn PostService> {
        &self.shared.post_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let (cors_origins, max_upload_bytes) = {
        let config = state.config();
        (
            config.server.cors_allowed_origins.clone(),
            config.server.max_upload_bytes,
        )
    };

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(system::root))
        .route("/health/live", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .merge(book_routes())
        .merge(post_routes())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn book_routes() -> Router<Arc<AppState>> {
    let collection = get(books::list_books).post(books::create_book);
    let item = get(books::get_book)
        .put(books::update_book)
        .delete(books::delete_book);

    Router::new()
        .route("/books/", collection.clone())
        .route("/books", collection)
        .route("/books/{id}", item)
}

fn post_routes() -> Router<Arc<AppState>> {
    let collection = get(posts::list_posts).post(posts::create_post);
    let item = get(posts::get_post)
        .put(posts::update_post)
        .delete(posts::delete_post);

    Router::new()
        .route("/posts/", collection.clone())
        .route("/posts", collection)
        .route("/posts/{id}", item)
        .route("/boards/", get(posts::list_boards))
        .route("/boards", get(posts::list_boards))
}
