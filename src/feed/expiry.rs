use chrono::{DateTime, Duration, Utc};

/// How long after its closing date a job still counts as "just closed".
pub const RECENT_EXPIRY_WINDOW_HOURS: i64 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryStatus {
    /// The closing date has passed (or was unparseable)
    pub expired: bool,
    /// Expired within the last 48 hours
    pub expired_recently: bool,
}

/// Classify a job's closing date against `now`. A missing closing date
/// (unparseable at ingestion) classifies as already expired so the job is
/// hidden from active views rather than shown indefinitely.
pub fn classify(closing_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ExpiryStatus {
    let Some(closing) = closing_date else {
        return ExpiryStatus {
            expired: true,
            expired_recently: false,
        };
    };
    let expired = now > closing;
    let expired_recently =
        expired && (now - closing) <= Duration::hours(RECENT_EXPIRY_WINDOW_HOURS);
    ExpiryStatus {
        expired,
        expired_recently,
    }
}
