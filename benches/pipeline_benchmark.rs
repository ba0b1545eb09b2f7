use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fuel_finder::models::{EnrichedStation, FilterCriteria, FuelType, Station};
use fuel_finder::services::filter::apply_filters;
use fuel_finder::services::sections::section_by_distance;

/// Build a synthetic enriched list spread over the search radius.
fn synthetic_stations(count: usize) -> Vec<EnrichedStation> {
    (0..count)
        .map(|i| {
            let id = i as i64;
            EnrichedStation {
                station: Station {
                    id,
                    name: format!("Station {}", id),
                    address: None,
                    latitude: 6.4 + (i % 100) as f64 * 0.001,
                    longitude: 3.3 + (i % 100) as f64 * 0.001,
                    // Deterministic spread across 0-50km
                    distance_m: (i * 7919 % 50_000) as f64,
                    price: if i % 5 == 0 {
                        None
                    } else {
                        Some(550.0 + (i % 120) as f64)
                    },
                    diesel_price: None,
                    gas_price: None,
                    kerosine_price: None,
                    last_updated: Some("2026-08-01T09:00:00Z".to_string()),
                },
                avg_rating: if i % 3 == 0 { None } else { Some((i % 5) as f64 + 0.5) },
                amenities: vec!["ATM".to_string()],
                products: vec!["Petrol".to_string()],
            }
        })
        .collect()
}

fn benchmark_pipeline(c: &mut Criterion) {
    let stations = synthetic_stations(5_000);

    let price_criteria = FilterCriteria {
        fuel_type: Some(FuelType::Petrol),
        price_min: "560".to_string(),
        price_max: "640".to_string(),
        min_rating: 2,
        ..Default::default()
    };
    let default_criteria = FilterCriteria::default();

    let mut group = c.benchmark_group("search_pipeline");

    group.bench_function("filter_price_scoped", |b| {
        b.iter(|| apply_filters(black_box(&stations), black_box(&price_criteria)))
    });

    group.bench_function("filter_passthrough", |b| {
        b.iter(|| apply_filters(black_box(&stations), black_box(&default_criteria)))
    });

    group.bench_function("filter_and_section", |b| {
        b.iter(|| {
            let filtered = apply_filters(black_box(&stations), black_box(&price_criteria));
            section_by_distance(filtered)
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
