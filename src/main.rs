// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fuel-Finder API Server
//!
//! Serves the station search pipeline for the fuel-finder app: candidate
//! search near an origin, crowd-sourced report aggregation, filtering,
//! and distance-banded results.

use fuel_finder::{
    config::Config,
    db::DataApi,
    services::{FilterStore, SearchService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Fuel-Finder API");

    // Initialize the hosted data API client
    let data = DataApi::new(&config.data_api_url, &config.data_api_key);
    tracing::info!(url = %config.data_api_url, "Data API client initialized");

    // Filter state store (empty criteria, no location until the app sets one)
    let filters = FilterStore::new();

    // Search pipeline service
    let search = SearchService::new(data.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        data,
        filters,
        search,
    });

    // Build router
    let app = fuel_finder::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fuel_finder=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
