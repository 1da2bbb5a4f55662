// http server mode - the same turn pipeline over a stateless api

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::core::{Claude, Message, Router, Screen};
use crate::Error;

struct AppState {
    router: Router<Claude>,
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
    /// prior turns, oldest first; the caller owns the transcript
    #[serde(default)]
    history: Vec<Message>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    intercepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub struct Server;

impl Server {
    pub async fn run(host: &str, port: u16, api_key: Option<String>) -> Result<(), Error> {
        // resolve credentials before binding anything
        let claude = Claude::new(api_key)?;
        let state = Arc::new(AppState {
            router: Router::new(claude),
        });

        let app = axum::Router::new()
            .route("/health", get(health))
            .route("/chat", post(chat))
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = format!("{host}:{port}");
        println!("aidvice listening at http://{addr}");

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        Ok(())
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    if req.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatResponse {
                reply: String::new(),
                intercepted: false,
                error: Some("message must not be empty".to_string()),
            }),
        );
    }

    let intercepted = Screen::check(&req.message).intercept;
    let reply = state.router.respond(&req.message, &req.history).await;

    (
        StatusCode::OK,
        Json(ChatResponse {
            reply,
            intercepted,
            error: None,
        }),
    )
}
