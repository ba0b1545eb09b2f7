// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fuel-Finder: locate fuel stations and compare crowd-sourced prices
//!
//! This crate provides the backend API for the station search pipeline:
//! fetching candidates near an origin, aggregating crowd-sourced reports,
//! filtering and ranking, and grouping results into distance bands.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DataApi;
use services::{FilterStore, SearchService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub data: DataApi,
    pub filters: FilterStore,
    pub search: SearchService,
}
