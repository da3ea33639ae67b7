use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

// AppState is shared by every handler; the repository is the single store handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: &Configuration, repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config: config.clone(),
            repository,
        }
    }
}

pub type ServerError = (StatusCode, Json<Value>);

pub fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(json!({ "message": message })))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::DuplicateKey { .. } => StatusCode::CONFLICT,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Runtime { retryable: true, .. } => StatusCode::SERVICE_UNAVAILABLE,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            warn!("request failed with {}: {:?}", status, err);
        }
        server_error(status, err.message())
    }
}
