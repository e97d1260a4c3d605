pub mod crud;
pub mod dto;
pub mod error;
pub mod health;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state.clone())
        // Resources
        .merge(crud::resource_router(state.notices))
        .merge(crud::resource_router(state.boards))
        .merge(crud::resource_router(state.authors))
}
