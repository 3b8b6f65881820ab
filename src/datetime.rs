//! Display helpers for CMS timestamps and booking windows.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error("invalid timestamp {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("timestamp formatting failed: {0}")]
    Format(#[from] time::error::Format),
}

/// Parse an RFC 3339 timestamp such as `2020-01-01T00:00:00Z`.
///
/// # Errors
///
/// Returns `DateTimeError::Parse` if the input is not RFC 3339.
pub fn parse_timestamp(input: &str) -> Result<OffsetDateTime, DateTimeError> {
    OffsetDateTime::parse(input.trim(), &Rfc3339)
        .map_err(|source| DateTimeError::Parse { input: input.to_owned(), source })
}

/// Render an RFC 3339 timestamp as `01 Jan 2020, 01:05 PM` (UTC).
///
/// # Errors
///
/// Returns an error if the input does not parse.
pub fn format_date_time(input: &str) -> Result<String, DateTimeError> {
    let ts = parse_timestamp(input)?.to_offset(UtcOffset::UTC);
    let fmt = format_description!("[day] [month repr:short] [year], [hour repr:12]:[minute] [period]");
    Ok(ts.format(&fmt)?)
}

/// Time left in the window `[start, end)` as `"{h}h {m}m {s}s"`.
///
/// Before `start` the full window length is reported; at or after `end` the
/// result is `"0h 0m 0s"`.
#[must_use]
pub fn get_time_remaining(start: OffsetDateTime, end: OffsetDateTime, now: OffsetDateTime) -> String {
    let remaining = if now >= end {
        Duration::ZERO
    } else if now < start {
        end - start
    } else {
        end - now
    };
    let total = remaining.whole_seconds().max(0);
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}

/// [`get_time_remaining`] over RFC 3339 window bounds.
///
/// # Errors
///
/// Returns an error if either bound does not parse.
pub fn get_time_remaining_str(start: &str, end: &str, now: OffsetDateTime) -> Result<String, DateTimeError> {
    Ok(get_time_remaining(parse_timestamp(start)?, parse_timestamp(end)?, now))
}

#[cfg(test)]
#[path = "datetime_test.rs"]
mod tests;
