// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report aggregation: reduce the raw report log into per-station
//! aggregates in a single pass.

use crate::models::{Report, StationAggregate};
use std::collections::HashMap;

/// Reduce report rows into per-station aggregates.
///
/// Rules, applied per row:
/// - a rating in 1-5 feeds the station's running sum and count;
/// - amenity and payment-method additions are unioned into one set;
/// - a fuel tag normalizing to "Petrol" with a price records "Petrol" in
///   the product set;
/// - every key of the row's other-price map is recorded as given, not
///   normalized.
pub fn aggregate_reports(rows: &[Report]) -> HashMap<i64, StationAggregate> {
    let mut aggregates: HashMap<i64, StationAggregate> = HashMap::new();

    for row in rows {
        let entry = aggregates.entry(row.station_id).or_default();

        if let Some(rating) = row.rating {
            if (1..=5).contains(&rating) {
                entry.rating_sum += i64::from(rating);
                entry.rating_count += 1;
            }
        }

        if let Some(amenities) = &row.amenities_added {
            entry.amenities.extend(amenities.iter().cloned());
        }
        if let Some(methods) = &row.payment_methods_added {
            entry.amenities.extend(methods.iter().cloned());
        }

        if let Some(tag) = &row.fuel_type {
            if normalize_fuel_tag(tag) == "Petrol" && row.price.is_some() {
                entry.products.insert("Petrol".to_string());
            }
        }
        if let Some(others) = &row.other_prices {
            for product in others.keys() {
                entry.products.insert(product.clone());
            }
        }
    }

    aggregates
}

/// Normalize a free-text fuel tag to a canonical product name.
///
/// Matching is case-insensitive on substrings; tags outside the known set
/// keep their text with the first letter capitalized.
pub fn normalize_fuel_tag(tag: &str) -> String {
    let lower = tag.to_lowercase();
    if lower.contains("pms") || lower.contains("petrol") {
        "Petrol".to_string()
    } else if lower.contains("gas") {
        "Gas".to_string()
    } else if lower.contains("diesel") || lower.contains("ago") {
        "Diesel".to_string()
    } else if lower.contains("kerosine") || lower.contains("dpk") {
        "Kerosine".to_string()
    } else {
        capitalize_first(tag)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
