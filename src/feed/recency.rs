use chrono::{DateTime, Utc};

/// Coarse human-relative age of a posting. Buckets: under an hour, whole
/// hours up to a day, "1 day ago", then whole days. Future or missing
/// timestamps clamp to zero rather than producing negative ages.
pub fn time_ago(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let diff_hours = created_at
        .map(|posted| (now - posted).num_hours().max(0))
        .unwrap_or(0);

    if diff_hours < 1 {
        return "Less than 1 hour ago".to_string();
    }
    if diff_hours < 24 {
        return format!("{} hours ago", diff_hours);
    }
    let diff_days = diff_hours / 24;
    if diff_days == 1 {
        return "1 day ago".to_string();
    }
    format!("{} days ago", diff_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2025-06-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn bucket_boundaries() {
        let cases = [
            (Duration::minutes(59), "Less than 1 hour ago"),
            (Duration::minutes(90), "1 hours ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::hours(25), "1 day ago"),
            (Duration::hours(47), "1 day ago"),
            (Duration::hours(50), "2 days ago"),
            (Duration::days(10), "10 days ago"),
        ];
        for (age, expected) in cases {
            assert_eq!(time_ago(Some(now() - age), now()), expected, "age {:?}", age);
        }
    }

    #[test]
    fn future_timestamp_clamps_to_zero() {
        assert_eq!(
            time_ago(Some(now() + Duration::hours(5)), now()),
            "Less than 1 hour ago"
        );
    }

    #[test]
    fn missing_timestamp_reads_as_fresh() {
        assert_eq!(time_ago(None, now()), "Less than 1 hour ago");
    }
}
