//! Validation HTTP Routes
//!
//! - `GET  /validate?fileName=<name>` validates `<container>/<name>` from the store
//! - `POST /validate?fileName=<name>` same, ignoring the body
//! - `POST /validate` validates the raw request body
//! - `POST /validate/upload` validates the first file of a multipart form
//!
//! Every response body is `{"validationResult": ..., "message": ...}`.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info_span, warn};
use uuid::Uuid;

use crate::file_storage::{LocalBackend, SalesFileStore, StorageError};
use crate::observability::{log_event, Event, ObservationScope};
use crate::validation::{validate, ValidationResponse, ValidationVerdict};

// ==================
// Shared State
// ==================

/// Validation state shared across handlers
pub struct ValidateState {
    pub store: SalesFileStore<LocalBackend>,
}

impl ValidateState {
    pub fn new(storage_root: &Path, container: &str, max_upload_bytes: u64) -> Self {
        let backend = LocalBackend::new(storage_root.to_path_buf());
        Self {
            store: SalesFileStore::new(backend, container, max_upload_bytes),
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.store.max_file_size()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct ValidateQuery {
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

/// Status plus JSON body, used by every handler
pub type ValidateReply = (StatusCode, Json<ValidationResponse>);

// ==================
// Validation Routes
// ==================

/// Create validation routes
pub fn validate_routes(state: Arc<ValidateState>) -> Router {
    let body_limit = usize::try_from(state.max_upload_bytes()).unwrap_or(usize::MAX);

    Router::new()
        .route("/validate", get(validate_file_handler).post(validate_body_handler))
        .route("/validate/upload", post(validate_upload_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn invalid(code: StatusCode, message: impl Into<String>) -> ValidateReply {
    (code, Json(ValidationResponse::invalid(message)))
}

/// Validate `data` and turn the verdict into a reply, logging the outcome.
pub fn run_validation(source: &str, data: &[u8]) -> ValidateReply {
    let request_id = Uuid::new_v4();
    let span = info_span!("validation", %request_id, source, bytes = data.len());
    let scope = ObservationScope::new("VALIDATION", span);

    let verdict = scope.in_scope(|| validate(data));

    scope.in_scope(|| match &verdict {
        ValidationVerdict::Passed { record_count } => {
            log_event(
                Event::ValidationPassed,
                &format!("validated {} records", record_count),
            );
        }
        ValidationVerdict::Failed { reason, message } if reason.is_client_error() => {
            log_event(Event::ValidationRejected, &format!("{}: {}", reason, message));
        }
        ValidationVerdict::Failed { reason, message } => {
            log_event(Event::ValidationFault, &format!("{}: {}", reason, message));
        }
    });
    scope.complete();

    (status(verdict.status_code()), Json(verdict.to_response()))
}

fn storage_failure(file_name: &str, err: StorageError) -> ValidateReply {
    warn!(
        event = Event::StorageReadFailed.as_str(),
        file_name,
        status = err.status_code(),
        "{}",
        err
    );
    invalid(status(err.status_code()), err.to_string())
}

fn validate_stored(state: &ValidateState, file_name: &str) -> ValidateReply {
    match state.store.fetch(file_name) {
        Ok(data) => run_validation(file_name, &data),
        Err(e) => storage_failure(file_name, e),
    }
}

// ==================
// Handlers
// ==================

pub async fn validate_file_handler(
    State(state): State<Arc<ValidateState>>,
    Query(query): Query<ValidateQuery>,
) -> ValidateReply {
    match query.file_name.as_deref() {
        Some(file_name) => validate_stored(&state, file_name),
        None => invalid(
            StatusCode::BAD_REQUEST,
            "fileName query parameter is required",
        ),
    }
}

pub async fn validate_body_handler(
    State(state): State<Arc<ValidateState>>,
    Query(query): Query<ValidateQuery>,
    body: Bytes,
) -> ValidateReply {
    if let Some(file_name) = query.file_name.as_deref() {
        return validate_stored(&state, file_name);
    }

    if body.is_empty() {
        return invalid(
            StatusCode::BAD_REQUEST,
            "fileName query parameter or request body is required",
        );
    }

    run_validation("request-body", &body)
}

pub async fn validate_upload_handler(mut multipart: Multipart) -> ValidateReply {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return invalid(StatusCode::BAD_REQUEST, e.to_string()),
        };

        let is_file = field.file_name().is_some() || field.name() == Some("file");
        if !is_file {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => return invalid(StatusCode::BAD_REQUEST, e.to_string()),
        };

        return run_validation(&file_name, &data);
    }

    invalid(StatusCode::BAD_REQUEST, "No file provided")
}
