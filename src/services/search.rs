// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Station search orchestration.
//!
//! Runs the full pipeline for one search:
//! 1. Fetch candidate stations via the `nearby_stations` RPC
//! 2. Bulk-fetch the report log for the candidate id set
//! 3. Reduce reports into per-station aggregates and join
//! 4. Apply the active filter criteria and sort
//! 5. Group into 4 km distance bands
//!
//! Overlapping searches from one client session are serialized by a
//! monotonic ticket: a search that completes after a newer one began is
//! marked superseded so the client discards it instead of showing stale
//! results.

use crate::db::DataApi;
use crate::models::{Coordinates, FilterCriteria};
use crate::services::aggregate::aggregate_reports;
use crate::services::enrich::enrich;
use crate::services::filter::apply_filters;
use crate::services::sections::{section_by_distance, Section};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Notice shown to the user when the data backend is unreachable.
const BACKEND_UNAVAILABLE_NOTICE: &str =
    "Station search is temporarily unavailable. Please try again.";

/// Parameters for one search request.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text term; empty matches all stations.
    pub term: String,
    pub origin: Coordinates,
    pub radius_m: f64,
    /// Client session key for request sequencing, if the client sent one.
    pub session: Option<String>,
}

/// Outcome of one search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub sections: Vec<Section>,
    /// Number of stations across all sections.
    pub total: usize,
    /// Non-blocking notice when the backend failed and the result degraded
    /// to empty.
    pub notice: Option<String>,
    /// True when a newer search for the same session started while this
    /// one was in flight; the sections are omitted in that case.
    pub superseded: bool,
}

impl SearchOutcome {
    fn empty_with_notice(notice: &str) -> Self {
        Self {
            sections: Vec::new(),
            total: 0,
            notice: Some(notice.to_string()),
            superseded: false,
        }
    }

    fn superseded() -> Self {
        Self {
            sections: Vec::new(),
            total: 0,
            notice: None,
            superseded: true,
        }
    }
}

/// Issues monotonically increasing tickets per client session.
///
/// `begin` records the newest ticket for a session; `is_current` tells a
/// finishing search whether it is still the newest one.
pub struct SearchGuard {
    latest: DashMap<String, u64>,
    counter: AtomicU64,
}

impl SearchGuard {
    pub fn new() -> Self {
        Self {
            latest: DashMap::new(),
            counter: AtomicU64::new(0),
        }
    }

    /// Register a new search for a session and return its ticket.
    pub fn begin(&self, session: &str) -> u64 {
        let ticket = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.latest.insert(session.to_string(), ticket);
        ticket
    }

    /// Is this ticket still the newest one issued for the session?
    pub fn is_current(&self, session: &str, ticket: u64) -> bool {
        self.latest.get(session).is_none_or(|newest| *newest == ticket)
    }
}

impl Default for SearchGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// The search pipeline service.
#[derive(Clone)]
pub struct SearchService {
    data: DataApi,
    guard: Arc<SearchGuard>,
}

impl SearchService {
    pub fn new(data: DataApi) -> Self {
        Self {
            data,
            guard: Arc::new(SearchGuard::new()),
        }
    }

    /// Run one search with the given criteria.
    ///
    /// Backend failure on either call degrades to an empty result with a
    /// notice; there is no automatic retry.
    pub async fn search(&self, params: &SearchParams, criteria: &FilterCriteria) -> SearchOutcome {
        let ticket = params.session.as_deref().map(|s| self.guard.begin(s));

        let candidates = match self
            .data
            .nearby_stations(&params.term, params.origin, params.radius_m)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(error = %e, term = %params.term, "Candidate fetch failed");
                return SearchOutcome::empty_with_notice(BACKEND_UNAVAILABLE_NOTICE);
            }
        };

        let ids: Vec<i64> = candidates.iter().map(|s| s.id).collect();
        let aggregates = if ids.is_empty() {
            HashMap::new()
        } else {
            match self.data.reports_for_stations(&ids).await {
                Ok(rows) => aggregate_reports(&rows),
                Err(e) => {
                    tracing::warn!(error = %e, stations = ids.len(), "Report fetch failed");
                    return SearchOutcome::empty_with_notice(BACKEND_UNAVAILABLE_NOTICE);
                }
            }
        };

        let enriched = enrich(candidates, &aggregates);
        let filtered = apply_filters(&enriched, criteria);
        let sections = section_by_distance(filtered);
        let total = sections.iter().map(|s| s.stations.len()).sum();

        if let (Some(session), Some(ticket)) = (params.session.as_deref(), ticket) {
            if !self.guard.is_current(session, ticket) {
                tracing::debug!(session, ticket, "Discarding superseded search");
                return SearchOutcome::superseded();
            }
        }

        tracing::debug!(total, sections = sections.len(), "Search completed");
        SearchOutcome {
            sections,
            total,
            notice: None,
            superseded: false,
        }
    }
}
