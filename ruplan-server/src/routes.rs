use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::controllers;
use crate::{health_with_pool, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    // CORS aperto: il client gira su un'altra origine
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|Extension(state): Extension<Arc<AppState>>| async move {
            health_with_pool(&state.pool).await
        }))
        .route("/api/signup", post(controllers::signup))
        .route("/api/login", post(controllers::login))
        .route("/api/projects", post(controllers::create_project))
        // stesso percorso per GET e DELETE: il router non ammette due nomi di
        // parametro diversi, la GET legge :id come id del proprietario
        .route(
            "/api/projects/:id",
            get(controllers::list_projects).delete(controllers::delete_project),
        )
        .layer(cors)
        .layer(Extension(state))
}
