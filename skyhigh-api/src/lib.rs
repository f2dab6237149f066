use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod bookings;
pub mod error;
pub mod flights;
pub mod page;
pub mod render;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // The JSON endpoints may be called from other origins
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(page::routes())
        .merge(flights::routes())
        .merge(bookings::routes())
        .route("/health", get(|| async { "ok" }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
