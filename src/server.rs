//! HTTP upload endpoint for the processing pipeline
//!
//! Exposes the full validate-then-extract-then-persist pass as a multipart
//! upload endpoint, plus a liveness probe. The processor and sink are
//! shared across requests; every request's pass is independent.

use crate::app::adapters::postgres::PostgresSink;
use crate::app::services::sheet_loader;
use crate::app::services::sheet_processor::{Outcome, RecordSink, SheetProcessor};
use crate::constants::MAX_UPLOAD_BYTES;
use crate::{Error, Result};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Processor holding the immutable validation schema
    pub processor: Arc<SheetProcessor>,

    /// Persistence sink for accepted records
    pub sink: Arc<PostgresSink>,
}

/// Response body for the process endpoint
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    /// Whether the sheet was accepted and persisted
    pub success: bool,

    /// Human-readable outcome; joined validation errors on rejection
    pub message: String,

    /// Rows written on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_inserted: Option<u64>,
}

impl ProcessResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            records_inserted: None,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/process", post(process_sheet))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| Error::server(format!("Failed to bind {}: {}", bind, e)))?;

    info!("Listening on {}", bind);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::server(e.to_string()))
}

/// Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// Handle one spreadsheet upload: validate, extract, persist.
///
/// Expects multipart fields `sheet` (the workbook file), `customer_id`,
/// and `application_id`.
async fn process_sheet(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ProcessResponse>) {
    let mut sheet: Option<(String, Vec<u8>)> = None;
    let mut customer_id: Option<i64> = None;
    let mut application_id: Option<i64> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ProcessResponse::failure(format!(
                        "Malformed multipart request: {}",
                        e
                    ))),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "sheet" => {
                let filename = field.file_name().unwrap_or("upload.xlsx").to_string();
                match field.bytes().await {
                    Ok(bytes) => sheet = Some((filename, bytes.to_vec())),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ProcessResponse::failure(format!(
                                "Failed to read uploaded sheet: {}",
                                e
                            ))),
                        );
                    }
                }
            }
            "customer_id" => customer_id = read_id_field(field).await,
            "application_id" => application_id = read_id_field(field).await,
            _ => {} // Unknown fields are ignored
        }
    }

    let Some((filename, bytes)) = sheet else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ProcessResponse::failure("Missing 'sheet' file field")),
        );
    };
    let (Some(customer_id), Some(application_id)) = (customer_id, application_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ProcessResponse::failure(
                "Missing or invalid 'customer_id' / 'application_id' fields",
            )),
        );
    };

    info!(
        "Processing upload '{}' for customer {} application {}",
        filename, customer_id, application_id
    );

    let sheet_name = &state.processor.schema().sheet_name;
    let grid = match sheet_loader::load_grid_from_bytes(bytes, &filename, sheet_name) {
        Ok(grid) => grid,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ProcessResponse::failure(format!(
                    "Error loading sheet: {}",
                    e
                ))),
            );
        }
    };

    match state
        .processor
        .run_with_grid(&grid, customer_id, application_id)
    {
        Outcome::Rejected(report) => (
            StatusCode::BAD_REQUEST,
            Json(ProcessResponse::failure(if report.errors.is_empty() {
                "Validation failed".to_string()
            } else {
                report.errors.join("; ")
            })),
        ),
        Outcome::Accepted(records) if records.is_empty() => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ProcessResponse::failure(Error::EmptyExtraction.to_string())),
        ),
        Outcome::Accepted(records) => match state.sink.persist(&records).await {
            Ok(inserted) => (
                StatusCode::OK,
                Json(ProcessResponse {
                    success: true,
                    message: "Validation passed and data inserted successfully".to_string(),
                    records_inserted: Some(inserted),
                }),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProcessResponse::failure(format!(
                    "Data insertion failed: {}",
                    e
                ))),
            ),
        },
    }
}

/// Read a numeric id field; unparsable values read as missing
async fn read_id_field(field: axum::extract::multipart::Field<'_>) -> Option<i64> {
    let text = field.text().await.ok()?;
    parse_id(&text)
}

/// Parse a positive identifier from a form field
fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
