//! Wastesort Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
pub mod store;

pub use classifier::{Classifier, Label, RandomClassifier};
pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    /// Create a new AppState with the default random classifier
    pub fn new(db: Db, config: Config) -> Self {
        Self {
            db,
            config,
            classifier: Arc::new(RandomClassifier),
        }
    }

    /// Swap the label-assignment strategy (tests use a fixed classifier)
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Build the application router
///
/// One route per screen of the demo, plus health and admin; the same router
/// serves production and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/admin/stats", get(routes::admin_stats))
        .route("/api/register", post(routes::register_user))
        .route("/api/login", post(routes::login_user))
        .route("/api/logout", post(routes::logout_user))
        .route("/api/home", get(routes::home))
        .route("/api/classify", post(routes::classify_image))
        .route(
            "/api/history",
            get(routes::get_history).delete(routes::clear_history),
        )
        .route("/api/map", get(routes::map_markers))
        .route("/api/dashboard", get(routes::dashboard))
        .with_state(state)
}
