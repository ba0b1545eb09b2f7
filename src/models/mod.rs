// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod aggregate;
pub mod filter;
pub mod report;
pub mod station;

pub use aggregate::StationAggregate;
pub use filter::{FilterCriteria, FilterPatch, FuelType, SortMode};
pub use report::{NewReport, Report};
pub use station::{Coordinates, EnrichedStation, Station};
