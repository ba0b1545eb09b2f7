// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an optional RFC3339 string, falling back to the Unix epoch.
///
/// The last-update sort treats a missing or malformed timestamp as
/// infinitely old, so those stations sink to the end of a descending sort.
pub fn parse_rfc3339_or_epoch(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|r| DateTime::parse_from_rfc3339(r).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_epoch() {
        assert_eq!(parse_rfc3339_or_epoch(None), DateTime::UNIX_EPOCH);
        assert_eq!(
            parse_rfc3339_or_epoch(Some("not-a-date")),
            DateTime::UNIX_EPOCH
        );
    }

    #[test]
    fn test_parse_round_trips_formatted_value() {
        let now = DateTime::from_timestamp(1_704_103_200, 0).unwrap();
        let formatted = format_utc_rfc3339(now);
        assert_eq!(parse_rfc3339_or_epoch(Some(&formatted)), now);
    }
}
