pub mod auth;
pub mod config;
pub mod error;
pub mod flow;
pub mod state;
pub mod tasks;

use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpResponse, HttpServer};

pub use config::Settings;
pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
}

impl AppState {
    pub fn new(config: Settings) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Builds the HTTP server on an already-bound listener. Used by both the
/// binary and the end-to-end tests (which bind an ephemeral port).
pub fn run(listener: TcpListener, config: Settings) -> std::io::Result<Server> {
    let state = web::Data::new(AppState::new(config.clone()));
    let workers = config.server.workers as usize;

    let server = HttpServer::new(move || {
        let cors = if config.cors.enabled {
            Cors::default()
                .allowed_origin(&config.cors.allowed_origin)
                .allowed_methods(vec!["GET"])
                .allowed_headers(vec!["Authorization", "Content-Type"])
        } else {
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .route("/tasks", web::get().to(tasks::list_tasks))
            .route("/api/auth/token", web::get().to(auth::handlers::token_exchange))
    })
    .listen(listener)?
    .workers(workers)
    .run();

    Ok(server)
}
