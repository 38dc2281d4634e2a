//! Shared helper functions for CLI commands

use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY-MM-DD` for list output
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Treat an empty argument as absent
///
/// Whitespace is kept: a blank or padded name is still looked up as given.
pub fn non_empty(arg: Option<&str>) -> Option<&str> {
    arg.filter(|s| !s.is_empty())
}
