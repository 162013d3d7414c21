use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/calculate", post(handlers::calculate))
        .route("/convert", post(handlers::convert))
        .route("/text-process", post(handlers::text_process))
        .route("/format-json", post(handlers::format_json))
        .route("/bmi", post(handlers::bmi))
        .route("/age", post(handlers::age))
        .route("/password", post(handlers::password))
        .route("/contact", post(handlers::contact))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

// 原站對所有來源開放，這裡照做
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
