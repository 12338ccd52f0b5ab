//! Parsing of the player's positional time strings.
//!
//! The service reports `playback_pos` and `length` as unnormalized text in
//! `MM:SS` or `H:MM:SS` form, so every poll re-parses them from scratch.

/// A timestamp that does not fit the `[H:]MM:SS` grammar.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TimestampError {
    #[error("expected 2 or 3 colon-separated fields, got {0}")]
    FieldCount(usize),
    #[error("non-numeric field {0:?}")]
    BadField(String),
}

fn field(s: &str) -> Result<u64, TimestampError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::BadField(s.to_string()));
    }
    s.parse().map_err(|_| TimestampError::BadField(s.to_string()))
}

/// Converts a `MM:SS` or `H:MM:SS` timestamp to total elapsed seconds.
///
/// An absent hours field counts as zero. Anything outside the grammar is a
/// [`TimestampError`]; callers treat that as a missing value, not a failure.
pub fn timestamp_seconds(timestamp: &str) -> Result<u64, TimestampError> {
    let fields: Vec<&str> = timestamp.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => (0, field(m)?, field(s)?),
        [h, m, s] => (field(h)?, field(m)?, field(s)?),
        other => return Err(TimestampError::FieldCount(other.len())),
    };
    Ok(hours * 3600 + minutes * 60 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn minutes_seconds() {
        assert_eq!(timestamp_seconds("1:30"), Ok(90));
        assert_eq!(timestamp_seconds("03:00"), Ok(180));
        assert_eq!(timestamp_seconds("0:00"), Ok(0));
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(timestamp_seconds("1:02:03"), Ok(3723));
        assert_eq!(timestamp_seconds("12:00:00"), Ok(43200));
    }

    #[test]
    fn absent_hours_is_zero_hours() {
        assert_eq!(timestamp_seconds("45:10"), timestamp_seconds("0:45:10"));
    }

    #[test]
    fn malformed_is_a_typed_no_match() {
        assert_matches!(timestamp_seconds(""), Err(TimestampError::FieldCount(1)));
        assert_matches!(timestamp_seconds("90"), Err(TimestampError::FieldCount(1)));
        assert_matches!(
            timestamp_seconds("1:2:3:4"),
            Err(TimestampError::FieldCount(4))
        );
        assert_matches!(timestamp_seconds("1:xx"), Err(TimestampError::BadField(_)));
        assert_matches!(timestamp_seconds(":30"), Err(TimestampError::BadField(_)));
        assert_matches!(timestamp_seconds("-1:30"), Err(TimestampError::BadField(_)));
        assert_matches!(timestamp_seconds("1:30 "), Err(TimestampError::BadField(_)));
    }
}
