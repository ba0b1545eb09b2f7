// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Crowd-sourced report submission.

use crate::error::{AppError, Result};
use crate::models::NewReport;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/reports", post(submit_report))
}

/// A new report from the app.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitReportRequest {
    pub station_id: i64,
    /// Star rating, 1-5.
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub fuel_type: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub other_prices: Option<HashMap<String, f64>>,
    pub amenities_added: Option<Vec<String>>,
    pub payment_methods_added: Option<Vec<String>>,
}

/// Response for a submitted report.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct SubmitReportResponse {
    pub success: bool,
    pub message: String,
}

/// Validate a report and forward it to the data API.
///
/// A report must carry at least one observation; an empty row would only
/// dilute the aggregates.
async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitReportRequest>,
) -> Result<Json<SubmitReportResponse>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let has_observation = request.rating.is_some()
        || request.price.is_some()
        || request.other_prices.as_ref().is_some_and(|p| !p.is_empty())
        || request
            .amenities_added
            .as_ref()
            .is_some_and(|a| !a.is_empty())
        || request
            .payment_methods_added
            .as_ref()
            .is_some_and(|p| !p.is_empty());
    if !has_observation {
        return Err(AppError::BadRequest(
            "Report must include a rating, price, amenity, or payment method".to_string(),
        ));
    }

    tracing::info!(
        station_id = request.station_id,
        has_rating = request.rating.is_some(),
        has_price = request.price.is_some(),
        "Submitting report"
    );

    let report = NewReport {
        station_id: request.station_id,
        rating: request.rating,
        fuel_type: request.fuel_type,
        price: request.price,
        other_prices: request.other_prices,
        amenities_added: request.amenities_added,
        payment_methods_added: request.payment_methods_added,
        reported_at: format_utc_rfc3339(chrono::Utc::now()),
    };

    state.data.insert_report(&report).await?;

    Ok(Json(SubmitReportResponse {
        success: true,
        message: "Report submitted. Thanks for keeping prices fresh.".to_string(),
    }))
}
