use axum::{Json, Router, http::StatusCode, http::Uri, routing::get};

use crate::{response::ErrorResponse, state::AppState};

pub mod doc;
pub mod health;
pub mod params;
pub mod products;

pub const WELCOME_MESSAGE: &str = "Welcome to the largest beauty products reseller!";

/// Full application router with state bound; transport layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_message))
        .route("/health", get(health::health_check))
        .merge(products::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = String),
    ),
    tag = "Health"
)]
pub async fn welcome_message() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse<&'static str>>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}
