use chrono::{DateTime, Utc};

/// 服務端要求的時間格式，精確到秒並以 `Z` 結尾
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn utc_now_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn timestamp_or_now(value: Option<String>) -> String {
    match value {
        Some(ts) if !ts.is_empty() => ts,
        _ => utc_now_timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(at), "2024-03-09T07:05:01Z");
    }

    #[test]
    fn test_utc_now_is_parseable_and_recent() {
        let before = Utc::now();
        let ts = utc_now_timestamp();

        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));

        let parsed = NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT)
            .unwrap()
            .and_utc();
        let drift = (parsed - before).num_seconds().abs();
        assert!(drift <= 2, "timestamp drifted {}s", drift);
    }

    #[test]
    fn test_timestamp_or_now_keeps_explicit_value() {
        let explicit = "2023-01-01T00:00:00Z".to_string();
        assert_eq!(timestamp_or_now(Some(explicit.clone())), explicit);
        assert_ne!(timestamp_or_now(Some(String::new())), "");
        assert!(timestamp_or_now(None).ends_with('Z'));
    }
}
