// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregate;
pub mod enrich;
pub mod filter;
pub mod filter_store;
pub mod search;
pub mod sections;

pub use filter_store::{FilterState, FilterStore};
pub use search::{SearchOutcome, SearchParams, SearchService};
pub use sections::Section;
