use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use saiyana_notification::EmailService;
use tower_http::cors::{Any, CorsLayer};

mod about;
pub mod contact;
mod health;
mod index;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Present only when email delivery is configured.
    pub email: Option<EmailService>,
}

pub fn router(app_state: AppState) -> Router {
    // The form posts cross-origin in some deployments; keep the API
    // permissive and answer preflight.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/contact", get(contact::page))
        .merge(
            Router::new()
                .route("/api/contact", post(contact::submit))
                .layer(cors),
        )
        .with_state(app_state)
}
