//! REST API
//!
//! Routes kept from the web front end:
//!
//! | Method | Path             | Handler                 |
//! |--------|------------------|-------------------------|
//! | GET    | `/`              | [`handlers::root`]        |
//! | POST   | `/api/users`     | [`handlers::create_user`] |
//! | GET    | `/api/users`     | [`handlers::list_users`]  |
//! | GET    | `/api/questions` | [`handlers::questions`]   |
//! | POST   | `/api/diagnosis` | [`handlers::diagnose`]    |

pub mod error;
pub mod handlers;

pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use triage_application::{DiagnoseUseCase, ListIntakesUseCase, RegisterIntakeUseCase};

/// Application state shared across handlers
pub struct AppState {
    pub diagnose: DiagnoseUseCase,
    pub register: RegisterIntakeUseCase,
    pub list: ListIntakesUseCase,
}

/// Build the router with CORS open to any origin
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/users",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route("/api/questions", get(handlers::questions))
        .route("/api/diagnosis", post(handlers::diagnose))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
