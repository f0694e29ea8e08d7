//! Field-selection endpoint.

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use projector::{ProjectedRecord, SelectRequest};

use crate::error::ApiError;

/// POST /select — project `data` onto `fields`.
///
/// Responds with one object per input record, in input order, each holding
/// exactly the requested fields (`null` where a record lacks one).
#[tracing::instrument(skip_all)]
pub async fn select(
    payload: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<Vec<ProjectedRecord>>, ApiError> {
    metrics::counter!("select_requests_total").increment(1);
    let Json(req) = payload.inspect_err(|rejection| {
        metrics::counter!("select_requests_rejected").increment(1);
        tracing::warn!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "rejected select body"
        );
    })?;

    let start = Instant::now();
    let projected = req.project();
    let duration = start.elapsed().as_secs_f64();

    metrics::histogram!("select_fields_requested").record(req.fields.len() as f64);
    metrics::histogram!("select_duration_seconds").record(duration);
    metrics::counter!("select_records_projected").increment(projected.len() as u64);
    tracing::info!(
        records = req.data.len(),
        fields = req.fields.len(),
        duration,
        "select completed"
    );

    Ok(Json(projected))
}
