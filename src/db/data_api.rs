// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hosted data API client.
//!
//! The data backend exposes a PostgREST-style surface:
//! - `POST /rpc/nearby_stations` for the candidate search (distance is
//!   computed server-side relative to the origin)
//! - `GET /reports?station_id=in.(...)` for the bulk report fetch
//! - `POST /reports` for new crowd-sourced reports
//!
//! All calls authenticate with the project API key. No retry logic beyond
//! what reqwest provides by default.

use crate::db::endpoints;
use crate::error::AppError;
use crate::models::{Coordinates, NewReport, Report, Station};
use futures_util::{stream, StreamExt, TryStreamExt};
use serde::Deserialize;

/// Max station ids per bulk report request (keeps the filter list, and thus
/// the request URI, bounded).
const REPORT_IDS_PER_REQUEST: usize = 50;
/// Max report chunk requests in flight at once.
const MAX_CONCURRENT_FETCHES: usize = 4;

/// Client for the hosted data API.
#[derive(Clone)]
pub struct DataApi {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DataApi {
    /// Create a new client for the given project base URL and API key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    // ─── Candidate Search ────────────────────────────────────────

    /// Fetch candidate stations near an origin via the search RPC.
    ///
    /// An empty `term` matches all stations. The returned list carries no
    /// ordering guarantee; each record's `distance_m` is relative to
    /// `origin`.
    pub async fn nearby_stations(
        &self,
        term: &str,
        origin: Coordinates,
        radius_m: f64,
    ) -> Result<Vec<Station>, AppError> {
        let url = format!("{}/{}", self.base_url, endpoints::NEARBY_STATIONS_RPC);

        let body = serde_json::json!({
            "search_term": term,
            "origin_lat": origin.latitude,
            "origin_lng": origin.longitude,
            "radius_m": radius_m,
        });

        let response = self
            .authed(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::DataApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Fetch a single station row by id.
    pub async fn station_by_id(&self, id: i64) -> Result<Option<Station>, AppError> {
        let url = format!("{}/{}", self.base_url, endpoints::STATIONS);

        let response = self
            .authed(self.http.get(&url))
            .query(&[("id", format!("eq.{}", id)), ("limit", "1".to_string())])
            .send()
            .await
            .map_err(|e| AppError::DataApi(e.to_string()))?;

        let rows: Vec<Station> = self.check_response_json(response).await?;
        Ok(rows.into_iter().next())
    }

    // ─── Reports ─────────────────────────────────────────────────

    /// Fetch all report rows for a set of station ids.
    ///
    /// The id list is split into bounded chunks fetched concurrently; row
    /// order across chunks is not significant since aggregation is
    /// order-independent. An empty id set short-circuits to no rows.
    pub async fn reports_for_stations(&self, ids: &[i64]) -> Result<Vec<Report>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let chunks: Vec<Vec<i64>> = ids
            .chunks(REPORT_IDS_PER_REQUEST)
            .map(<[i64]>::to_vec)
            .collect();

        let per_chunk: Vec<Vec<Report>> = stream::iter(chunks)
            .map(|chunk| self.fetch_report_chunk(chunk))
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .try_collect()
            .await?;

        Ok(per_chunk.into_iter().flatten().collect())
    }

    async fn fetch_report_chunk(&self, ids: Vec<i64>) -> Result<Vec<Report>, AppError> {
        let url = format!("{}/{}", self.base_url, endpoints::REPORTS);
        let id_list = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .authed(self.http.get(&url))
            .query(&[("station_id", format!("in.({})", id_list))])
            .send()
            .await
            .map_err(|e| AppError::DataApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Insert a new crowd-sourced report.
    pub async fn insert_report(&self, report: &NewReport) -> Result<(), AppError> {
        let url = format!("{}/{}", self.base_url, endpoints::REPORTS);

        let response = self
            .authed(self.http.post(&url))
            .header("Prefer", "return=minimal")
            .json(report)
            .send()
            .await
            .map_err(|e| AppError::DataApi(e.to_string()))?;

        self.check_response(response).await
    }

    // ─── Request Helpers ─────────────────────────────────────────

    /// Attach the project API key to a request.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::DataApi(format!(
            "Data API returned {}: {}",
            status, body
        )))
    }

    /// Check response status and deserialize the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DataApi(format!(
                "Data API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataApi(format!("Invalid response body: {}", e)))
    }
}
