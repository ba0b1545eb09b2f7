// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Join candidate stations with their report aggregates.

use crate::models::{EnrichedStation, Station, StationAggregate};
use std::collections::HashMap;

/// Attach aggregate fields to each candidate station.
///
/// Stations without reports get default aggregate fields; no station is
/// dropped at this stage.
pub fn enrich(
    candidates: Vec<Station>,
    aggregates: &HashMap<i64, StationAggregate>,
) -> Vec<EnrichedStation> {
    candidates
        .into_iter()
        .map(|station| match aggregates.get(&station.id) {
            Some(agg) => EnrichedStation {
                avg_rating: agg.avg_rating(),
                amenities: agg.amenities.iter().cloned().collect(),
                products: agg.products.iter().cloned().collect(),
                station,
            },
            None => EnrichedStation {
                avg_rating: None,
                amenities: Vec::new(),
                products: Vec::new(),
                station,
            },
        })
        .collect()
}
