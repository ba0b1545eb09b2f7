// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter criteria held by the filter store and consumed by the
//! filter/sort engine.

use crate::models::Station;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The fixed set of fuel products a price filter can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub enum FuelType {
    Petrol,
    Diesel,
    Gas,
    Kerosine,
}

impl FuelType {
    /// Canonical product name as it appears in aggregated product lists.
    pub fn product_name(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Gas => "Gas",
            FuelType::Kerosine => "Kerosine",
        }
    }

    /// The station price snapshot this fuel's price filter applies to.
    /// Petrol is the primary product and maps to `price`.
    pub fn price_of(self, station: &Station) -> Option<f64> {
        match self {
            FuelType::Petrol => station.price,
            FuelType::Diesel => station.diesel_price,
            FuelType::Gas => station.gas_price,
            FuelType::Kerosine => station.kerosine_price,
        }
    }
}

/// Result ordering requested by the user.
///
/// `Distance` keeps fetch order at the filter stage; nearest-first ordering
/// is applied when results are grouped into distance bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub enum SortMode {
    #[default]
    Distance,
    LastUpdate,
}

/// The user's active search filters.
///
/// The price bounds are kept as free text exactly as entered; parsing is
/// permissive and happens in the filter engine (unparseable text means "no
/// bound"). No validation is performed at the store boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/lib/generated/")
)]
pub struct FilterCriteria {
    pub price_min: String,
    pub price_max: String,
    pub fuel_type: Option<FuelType>,
    /// Minimum average rating, 0 meaning no rating filter.
    pub min_rating: u8,
    /// Amenities a station must all carry.
    pub amenities: Vec<String>,
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_min: String::new(),
            price_max: String::new(),
            fuel_type: None,
            min_rating: 0,
            amenities: Vec::new(),
            sort: SortMode::Distance,
        }
    }
}

/// A partial update to the filter criteria.
///
/// Only keys present in the patch are overwritten (shallow merge).
/// `fuel_type` uses a nested option so that an absent key leaves the
/// current selection alone while an explicit `null` clears it.
#[derive(Debug, Default, Deserialize)]
pub struct FilterPatch {
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub fuel_type: Option<Option<FuelType>>,
    pub min_rating: Option<u8>,
    pub amenities: Option<Vec<String>>,
    pub sort: Option<SortMode>,
}

/// Deserialize a present-but-possibly-null field into `Some(Option<T>)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_with_prices() -> Station {
        Station {
            id: 1,
            name: "Test Station".to_string(),
            address: None,
            latitude: 6.5,
            longitude: 3.3,
            distance_m: 100.0,
            price: Some(617.0),
            diesel_price: Some(980.0),
            gas_price: None,
            kerosine_price: Some(1150.0),
            last_updated: None,
        }
    }

    #[test]
    fn test_petrol_maps_to_primary_price() {
        let station = station_with_prices();
        assert_eq!(FuelType::Petrol.price_of(&station), Some(617.0));
        assert_eq!(FuelType::Diesel.price_of(&station), Some(980.0));
        assert_eq!(FuelType::Gas.price_of(&station), None);
        assert_eq!(FuelType::Kerosine.price_of(&station), Some(1150.0));
    }

    #[test]
    fn test_sort_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortMode::LastUpdate).unwrap(),
            "\"last_update\""
        );
        assert_eq!(
            serde_json::from_str::<SortMode>("\"distance\"").unwrap(),
            SortMode::Distance
        );
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null_fuel_type() {
        let absent: FilterPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.fuel_type, None);

        let cleared: FilterPatch = serde_json::from_str(r#"{"fuel_type": null}"#).unwrap();
        assert_eq!(cleared.fuel_type, Some(None));

        let set: FilterPatch = serde_json::from_str(r#"{"fuel_type": "Diesel"}"#).unwrap();
        assert_eq!(set.fuel_type, Some(Some(FuelType::Diesel)));
    }
}
