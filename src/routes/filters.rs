// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter store endpoints: read, patch, reset, and location updates.
//!
//! No validation happens here; the store accepts criteria as-is and the
//! filter engine treats malformed price text as "no bound".

use crate::error::Result;
use crate::models::{Coordinates, FilterCriteria, FilterPatch};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/filters", get(get_filters).patch(patch_filters))
        .route("/api/filters/reset", post(reset_filters))
        .route("/api/location", put(put_location))
}

/// Current filter store contents.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct FilterStateResponse {
    pub location: Option<Coordinates>,
    pub criteria: FilterCriteria,
}

fn state_response(state: &AppState) -> FilterStateResponse {
    let snapshot = state.filters.snapshot();
    FilterStateResponse {
        location: snapshot.location,
        criteria: snapshot.criteria,
    }
}

/// Get the current location and criteria.
async fn get_filters(State(state): State<Arc<AppState>>) -> Result<Json<FilterStateResponse>> {
    Ok(Json(state_response(&state)))
}

/// Merge a partial criteria update; only keys present in the body change.
async fn patch_filters(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<FilterPatch>,
) -> Result<Json<FilterStateResponse>> {
    state.filters.apply(patch);
    Ok(Json(state_response(&state)))
}

/// Restore criteria to their defaults (location is kept).
async fn reset_filters(State(state): State<Arc<AppState>>) -> Result<Json<FilterStateResponse>> {
    state.filters.reset();
    Ok(Json(state_response(&state)))
}

/// Replace the saved search location.
async fn put_location(
    State(state): State<Arc<AppState>>,
    Json(location): Json<Coordinates>,
) -> Result<Json<FilterStateResponse>> {
    state.filters.set_location(location);
    Ok(Json(state_response(&state)))
}
