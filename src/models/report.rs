// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Crowd-sourced report rows.
//!
//! Reports are append-only: this service reads them in bulk per search and
//! reduces them into aggregates, and forwards new submissions to the data
//! API. It never mutates or deletes a report.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single crowd-sourced observation about a station.
///
/// Every field other than `station_id` is optional; a report may carry any
/// combination of a rating, a price observation, and amenity or
/// payment-method additions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(alias = "station")]
    pub station_id: i64,
    /// Star rating, meaningful in 1-5.
    #[serde(default)]
    pub rating: Option<i32>,
    /// Free-text fuel tag for the primary price ("PMS", "petrol", ...).
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// Price observed for the primary fuel tag.
    #[serde(default)]
    pub price: Option<f64>,
    /// Prices for other fuel products, keyed by product name.
    #[serde(default)]
    pub other_prices: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub amenities_added: Option<Vec<String>>,
    #[serde(default)]
    pub payment_methods_added: Option<Vec<String>>,
}

/// A new report row to insert via the data API.
#[derive(Debug, Clone, Serialize)]
pub struct NewReport {
    pub station_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_prices: Option<HashMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities_added: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods_added: Option<Vec<String>>,
    /// When the report was submitted (ISO 8601, set by this service).
    pub reported_at: String,
}
