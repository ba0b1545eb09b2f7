// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter state store: the current search location and filter criteria,
//! with subscriber notification on every change.
//!
//! The store performs no validation; the filter engine tolerates malformed
//! price text downstream. State is in-memory only and does not survive a
//! restart.

use crate::models::{Coordinates, FilterCriteria, FilterPatch};
use tokio::sync::watch;

/// Current store contents: location plus criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub location: Option<Coordinates>,
    pub criteria: FilterCriteria,
}

/// Shared filter state with change notification.
pub struct FilterStore {
    tx: watch::Sender<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FilterState::default());
        Self { tx }
    }

    /// Snapshot the current state.
    pub fn snapshot(&self) -> FilterState {
        self.tx.borrow().clone()
    }

    /// Merge a partial update into the criteria. Only keys present in the
    /// patch are overwritten.
    pub fn apply(&self, patch: FilterPatch) {
        self.tx.send_modify(|state| {
            if let Some(price_min) = patch.price_min {
                state.criteria.price_min = price_min;
            }
            if let Some(price_max) = patch.price_max {
                state.criteria.price_max = price_max;
            }
            if let Some(fuel_type) = patch.fuel_type {
                state.criteria.fuel_type = fuel_type;
            }
            if let Some(min_rating) = patch.min_rating {
                state.criteria.min_rating = min_rating;
            }
            if let Some(amenities) = patch.amenities {
                state.criteria.amenities = amenities;
            }
            if let Some(sort) = patch.sort {
                state.criteria.sort = sort;
            }
        });
    }

    /// Replace the search location wholesale.
    pub fn set_location(&self, location: Coordinates) {
        self.tx.send_modify(|state| {
            state.location = Some(location);
        });
    }

    /// Restore the criteria to their defaults. The location is left alone.
    pub fn reset(&self) {
        self.tx.send_modify(|state| {
            state.criteria = FilterCriteria::default();
        });
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.tx.subscribe()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}
