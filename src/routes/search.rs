// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Station search and detail endpoints.

use crate::error::{AppError, Result};
use crate::models::{Coordinates, EnrichedStation};
use crate::services::aggregate::aggregate_reports;
use crate::services::enrich::enrich;
use crate::services::{SearchParams, Section};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/{id}", get(get_station))
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct SearchQuery {
    /// Free-text search term; empty or absent matches all stations.
    q: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    lng: Option<f64>,
    /// Search radius in meters; falls back to the configured default.
    #[validate(range(min = 100.0, max = 200_000.0))]
    radius: Option<f64>,
    /// Client session key used to discard superseded overlapping searches.
    session: Option<String>,
}

/// Search response: stations grouped into distance bands.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct SearchResponse {
    pub sections: Vec<Section>,
    pub total: u32,
    /// Non-blocking notice, set when the search degraded to empty because
    /// the data backend was unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// True when a newer search for the same session replaced this one;
    /// clients should discard the response.
    pub superseded: bool,
}

/// Run the station search pipeline with the store's current criteria.
///
/// The origin comes from the query when both `lat` and `lng` are present,
/// otherwise from the filter store's saved location.
async fn search_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let snapshot = state.filters.snapshot();

    let origin = match (params.lat, params.lng) {
        (Some(latitude), Some(longitude)) => Coordinates {
            latitude,
            longitude,
        },
        _ => snapshot.location.ok_or_else(|| {
            AppError::BadRequest(
                "No search location: pass lat/lng or set a location first".to_string(),
            )
        })?,
    };

    let term = params.q.unwrap_or_default();
    tracing::debug!(
        term = %term,
        lat = origin.latitude,
        lng = origin.longitude,
        "Searching stations"
    );

    let search_params = SearchParams {
        term,
        origin,
        radius_m: params.radius.unwrap_or(state.config.search_radius_m),
        session: params.session,
    };

    let outcome = state.search.search(&search_params, &snapshot.criteria).await;

    Ok(Json(SearchResponse {
        sections: outcome.sections,
        total: outcome.total as u32,
        notice: outcome.notice,
        superseded: outcome.superseded,
    }))
}

// ─── Station Detail ──────────────────────────────────────────

/// Station detail response: the station joined with its report aggregate.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct StationDetailResponse {
    #[serde(flatten)]
    pub station: EnrichedStation,
    /// Number of reports behind the aggregate.
    pub report_count: u32,
}

/// Get one station with its aggregate.
///
/// Unlike the search endpoint, backend failures here surface as errors:
/// there is no meaningful degraded detail view.
async fn get_station(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StationDetailResponse>> {
    let station = state
        .data
        .station_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Station {} not found", id)))?;

    let reports = state.data.reports_for_stations(&[id]).await?;
    let report_count = reports.len() as u32;
    let aggregates = aggregate_reports(&reports);

    let enriched = enrich(vec![station], &aggregates)
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Enrichment dropped station {}", id)))?;

    Ok(Json(StationDetailResponse {
        station: enriched,
        report_count,
    }))
}
