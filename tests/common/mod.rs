// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fuel_finder::config::Config;
use fuel_finder::db::DataApi;
use fuel_finder::routes::create_router;
use fuel_finder::services::{FilterStore, SearchService};
use fuel_finder::AppState;
use std::sync::Arc;

/// Create a test app whose data API client points at `data_api_url`
/// (usually a wiremock server). Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(data_api_url: &str) -> (axum::Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.data_api_url = data_api_url.trim_end_matches('/').to_string();

    let data = DataApi::new(&config.data_api_url, &config.data_api_key);
    let filters = FilterStore::new();
    let search = SearchService::new(data.clone());

    let state = Arc::new(AppState {
        config,
        data,
        filters,
        search,
    });

    (create_router(state.clone()), state)
}

/// Create a test app pointing at an unroutable backend, for tests that
/// never touch the data API or exercise its failure path.
#[allow(dead_code)]
pub fn create_offline_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app("http://127.0.0.1:1")
}

/// A candidate station row as the `nearby_stations` RPC would return it.
#[allow(dead_code)]
pub fn station_row(id: i64, distance_m: f64, price: Option<f64>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("Station {}", id),
        "address": "12 Marina Road",
        "latitude": 6.45,
        "longitude": 3.39,
        "distance_m": distance_m,
        "price": price,
        "diesel_price": null,
        "gas_price": null,
        "kerosine_price": null,
        "last_updated": "2026-08-01T09:00:00Z",
    })
}
