// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group an ordered station list into fixed-width distance bands for
//! sectioned display.

use crate::models::EnrichedStation;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Width of one distance band in kilometers.
const BAND_WIDTH_KM: u32 = 4;

/// One distance band and the stations inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct Section {
    /// Display title, e.g. "Within 4km".
    pub title: String,
    /// Upper bound of the band in kilometers.
    pub band_km: u32,
    pub stations: Vec<EnrichedStation>,
}

/// Group stations into 4 km distance bands.
///
/// The input is always re-sorted ascending by distance first; this is what
/// delivers nearest-first semantics regardless of the upstream sort.
/// Sections come out in ascending band order with stations ascending by
/// distance within each band, and the result is stable under re-invocation.
pub fn section_by_distance(mut stations: Vec<EnrichedStation>) -> Vec<Section> {
    stations.sort_by(|a, b| a.station.distance_m.total_cmp(&b.station.distance_m));

    let mut sections: Vec<Section> = Vec::new();
    for station in stations {
        let band_km = distance_band_km(station.station.distance_m);
        match sections.last_mut() {
            Some(section) if section.band_km == band_km => section.stations.push(station),
            _ => sections.push(Section {
                title: format!("Within {}km", band_km),
                band_km,
                stations: vec![station],
            }),
        }
    }

    sections
}

/// Band key for a distance: ceiling(distance_km / 4) * 4, with a zero key
/// promoted to the first band so the nearest section is always
/// "Within 4km".
fn distance_band_km(distance_m: f64) -> u32 {
    let distance_km = distance_m / 1000.0;
    let band = (distance_km / f64::from(BAND_WIDTH_KM)).ceil() as u32 * BAND_WIDTH_KM;
    if band == 0 {
        BAND_WIDTH_KM
    } else {
        band
    }
}
