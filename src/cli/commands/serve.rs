//! Serve command implementation
//!
//! Starts the HTTP endpoint exposing the processing pipeline. The schema
//! and database connection are resolved once at startup and shared across
//! requests.

use super::shared::setup_logging;
use crate::app::adapters::postgres::PostgresSink;
use crate::app::services::sheet_processor::SheetProcessor;
use crate::cli::args::ServeArgs;
use crate::config::{SheetSchema, StorageConfig};
use crate::server::{self, AppState};
use crate::Result;
use std::sync::Arc;
use tracing::info;

/// Serve command runner
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    args.validate()?;

    let schema = SheetSchema::load(&args.schema)?;
    let storage = StorageConfig::load(&args.config)?;

    info!(
        "Serving schema for sheet '{}' with {} attribute(s)",
        schema.sheet_name,
        schema.attributes.len()
    );

    let sink = PostgresSink::connect(&storage.database).await?;

    let state = AppState {
        processor: Arc::new(SheetProcessor::new(schema)),
        sink: Arc::new(sink),
    };

    server::serve(state, &args.bind).await
}
