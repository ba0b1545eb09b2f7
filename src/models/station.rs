// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Station models: raw candidates from the data API and the enriched
//! view the filter pipeline operates on.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A geographic point used as the search origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A candidate fuel station as returned by the `nearby_stations` RPC.
///
/// `distance_m` is computed server-side relative to the search origin and
/// is never recomputed here. The whole record is replaced on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct Station {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Distance from the search origin in meters (server-computed by the
    /// search RPC; zero for rows fetched outside a search context).
    #[serde(default)]
    pub distance_m: f64,
    /// Latest reported petrol price (the primary product).
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub diesel_price: Option<f64>,
    #[serde(default)]
    pub gas_price: Option<f64>,
    #[serde(default)]
    pub kerosine_price: Option<f64>,
    /// When the station's prices were last updated (ISO 8601).
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// A station joined with the aggregates reduced from its report log.
///
/// Aggregate fields default to none/empty when the station has no reports;
/// no station is dropped during enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct EnrichedStation {
    #[serde(flatten)]
    pub station: Station,
    /// Mean of all 1-5 ratings, or none if the station has no ratings.
    pub avg_rating: Option<f64>,
    /// Union of every amenity and payment method ever reported.
    pub amenities: Vec<String>,
    /// Union of every fuel product ever observed in a report.
    pub products: Vec<String>,
}
