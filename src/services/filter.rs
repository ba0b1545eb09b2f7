// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter/sort engine: apply the active criteria to an enriched station
//! list, then order the survivors.
//!
//! Pure and idempotent; running it twice with the same inputs yields the
//! same output.

use crate::models::{EnrichedStation, FilterCriteria, SortMode};
use crate::time_utils::parse_rfc3339_or_epoch;

/// Sentinel for stations without a price in a price-ascending sort; pushes
/// them past every real price.
const NO_PRICE_SENTINEL: f64 = f64::MAX;

/// Parse a free-text price bound. Empty or unparseable text means "no
/// bound", never an error.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Filter the enriched list by the active criteria, then sort it.
///
/// The predicate short-circuits in this order: fuel product presence,
/// price range (only meaningful with a fuel type selected), minimum
/// rating, required amenities. The conditions are independent, so the
/// order only affects how early a station is rejected.
pub fn apply_filters(
    stations: &[EnrichedStation],
    criteria: &FilterCriteria,
) -> Vec<EnrichedStation> {
    let min_bound = parse_price(&criteria.price_min);
    let max_bound = parse_price(&criteria.price_max);
    let range_active = min_bound.is_some() || max_bound.is_some();

    let mut kept: Vec<EnrichedStation> = stations
        .iter()
        .filter(|station| {
            passes(station, criteria, range_active, min_bound, max_bound)
        })
        .cloned()
        .collect();

    sort_stations(&mut kept, criteria, range_active);
    kept
}

fn passes(
    station: &EnrichedStation,
    criteria: &FilterCriteria,
    range_active: bool,
    min_bound: Option<f64>,
    max_bound: Option<f64>,
) -> bool {
    if let Some(fuel) = criteria.fuel_type {
        if !station.products.iter().any(|p| p == fuel.product_name()) {
            return false;
        }

        if range_active {
            let Some(price) = fuel.price_of(&station.station) else {
                return false;
            };
            if min_bound.is_some_and(|min| price < min) {
                return false;
            }
            if max_bound.is_some_and(|max| price > max) {
                return false;
            }
        }
    }

    if criteria.min_rating > 0 {
        let rating = station.avg_rating.unwrap_or(0.0);
        if rating < f64::from(criteria.min_rating) {
            return false;
        }
    }

    criteria
        .amenities
        .iter()
        .all(|required| station.amenities.iter().any(|a| a == required))
}

fn sort_stations(stations: &mut [EnrichedStation], criteria: &FilterCriteria, range_active: bool) {
    match (criteria.fuel_type, range_active) {
        // An active price range scoped to a fuel implies cheapest-first,
        // overriding the requested sort mode.
        (Some(fuel), true) => {
            stations.sort_by(|a, b| {
                let price_a = fuel.price_of(&a.station).unwrap_or(NO_PRICE_SENTINEL);
                let price_b = fuel.price_of(&b.station).unwrap_or(NO_PRICE_SENTINEL);
                price_a.total_cmp(&price_b)
            });
        }
        _ => match criteria.sort {
            SortMode::LastUpdate => {
                stations.sort_by(|a, b| {
                    let ts_a = parse_rfc3339_or_epoch(a.station.last_updated.as_deref());
                    let ts_b = parse_rfc3339_or_epoch(b.station.last_updated.as_deref());
                    ts_b.cmp(&ts_a)
                });
            }
            // Fetch order is retained here; nearest-first ordering is
            // applied by the distance sectioner.
            SortMode::Distance => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FuelType, Station};

    fn enriched(id: i64, distance_m: f64, price: Option<f64>) -> EnrichedStation {
        EnrichedStation {
            station: Station {
                id,
                name: format!("Station {}", id),
                address: None,
                latitude: 6.5,
                longitude: 3.3,
                distance_m,
                price,
                diesel_price: None,
                gas_price: None,
                kerosine_price: None,
                last_updated: None,
            },
            avg_rating: None,
            amenities: Vec::new(),
            products: vec!["Petrol".to_string()],
        }
    }

    fn petrol_criteria(min: &str, max: &str) -> FilterCriteria {
        FilterCriteria {
            price_min: min.to_string(),
            price_max: max.to_string(),
            fuel_type: Some(FuelType::Petrol),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_price_is_permissive() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("12,5"), None);
        assert_eq!(parse_price(" 612.5 "), Some(612.5));
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_max_bound_excludes_pricier_station() {
        // Station 1 at 600 exceeds the 580 cap; station 2 at 550 survives.
        let stations = vec![
            enriched(1, 500.0, Some(600.0)),
            enriched(2, 4200.0, Some(550.0)),
        ];
        let criteria = petrol_criteria("", "580");

        let kept = apply_filters(&stations, &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].station.id, 2);
    }

    #[test]
    fn test_price_filter_needs_fuel_type() {
        let mut station = enriched(1, 500.0, Some(600.0));
        station.products.clear();
        let criteria = FilterCriteria {
            price_max: "580".to_string(),
            ..Default::default()
        };

        // Range is active but no fuel is selected, so no price filtering.
        let kept = apply_filters(&[station], &criteria);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_missing_price_excluded_when_range_active() {
        let stations = vec![enriched(1, 500.0, None)];
        let kept = apply_filters(&stations, &petrol_criteria("500", ""));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_product_presence_required_when_fuel_selected() {
        let mut station = enriched(1, 500.0, Some(600.0));
        station.products = vec!["Diesel".to_string()];

        let kept = apply_filters(&[station], &petrol_criteria("", ""));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_rating_filter_excludes_unrated_stations() {
        let mut rated_low = enriched(1, 100.0, None);
        rated_low.avg_rating = Some(2.5);
        let unrated = enriched(2, 200.0, None);
        let mut rated_high = enriched(3, 300.0, None);
        rated_high.avg_rating = Some(4.0);

        let criteria = FilterCriteria {
            min_rating: 3,
            ..Default::default()
        };

        let kept = apply_filters(&[rated_low, unrated, rated_high], &criteria);
        let ids: Vec<i64> = kept.iter().map(|s| s.station.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_required_amenities_must_all_be_present() {
        let mut full = enriched(1, 100.0, None);
        full.amenities = vec!["ATM".to_string(), "Car Wash".to_string()];
        let mut partial = enriched(2, 200.0, None);
        partial.amenities = vec!["ATM".to_string()];

        let criteria = FilterCriteria {
            amenities: vec!["ATM".to_string(), "Car Wash".to_string()],
            ..Default::default()
        };

        let kept = apply_filters(&[full, partial], &criteria);
        let ids: Vec<i64> = kept.iter().map(|s| s.station.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_active_range_sorts_cheapest_first_with_priceless_last() {
        let stations = vec![
            enriched(1, 100.0, Some(650.0)),
            enriched(2, 200.0, Some(590.0)),
            enriched(3, 300.0, Some(610.0)),
        ];
        // Min-only bound below every price keeps all three.
        let kept = apply_filters(&stations, &petrol_criteria("100", ""));
        let ids: Vec<i64> = kept.iter().map(|s| s.station.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_last_update_sorts_newest_first_missing_last() {
        let mut newest = enriched(1, 100.0, None);
        newest.station.last_updated = Some("2026-08-01T10:00:00Z".to_string());
        let mut older = enriched(2, 200.0, None);
        older.station.last_updated = Some("2026-07-01T10:00:00Z".to_string());
        let undated = enriched(3, 300.0, None);

        let criteria = FilterCriteria {
            sort: SortMode::LastUpdate,
            ..Default::default()
        };

        let kept = apply_filters(&[undated, older, newest], &criteria);
        let ids: Vec<i64> = kept.iter().map(|s| s.station.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_distance_mode_keeps_fetch_order() {
        // Deliberate: the engine leaves distance ordering to the sectioner,
        // which always re-sorts by distance before banding.
        let stations = vec![
            enriched(1, 900.0, None),
            enriched(2, 100.0, None),
            enriched(3, 500.0, None),
        ];

        let kept = apply_filters(&stations, &FilterCriteria::default());
        let ids: Vec<i64> = kept.iter().map(|s| s.station.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_engine_is_idempotent() {
        let stations = vec![
            enriched(1, 100.0, Some(650.0)),
            enriched(2, 200.0, Some(590.0)),
            enriched(3, 300.0, None),
        ];
        let criteria = petrol_criteria("500", "700");

        let once = apply_filters(&stations, &criteria);
        let twice = apply_filters(&once, &criteria);

        let ids_once: Vec<i64> = once.iter().map(|s| s.station.id).collect();
        let ids_twice: Vec<i64> = twice.iter().map(|s| s.station.id).collect();
        assert_eq!(ids_once, ids_twice);
    }
}
