//! Lenient scalar readers shared by the record normalizers.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use serde_json::Value;

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Reads an RFC 3339 instant, or a civil date-time ("2024-03-01T09:00")
/// interpreted in the system time zone.
pub(crate) fn parse_timestamp(value: &Value) -> Option<Timestamp> {
    let text = value.as_str()?.trim();
    if let Ok(timestamp) = text.parse::<Timestamp>() {
        return Some(timestamp);
    }
    let civil: DateTime = text.parse().ok()?;
    civil
        .to_zoned(TimeZone::system())
        .ok()
        .map(|zoned| zoned.timestamp())
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_timestamp_accepts_civil_time_in_system_zone() {
        let expected = "2024-03-01T09:00"
            .parse::<DateTime>()
            .unwrap()
            .to_zoned(TimeZone::system())
            .unwrap()
            .timestamp();
        assert_eq!(parse_timestamp(&json!("2024-03-01T09:00")), Some(expected));
        assert_eq!(
            parse_timestamp(&json!("2024-03-01T09:00:00Z")),
            Some("2024-03-01T09:00:00Z".parse().unwrap())
        );
        assert_eq!(parse_timestamp(&json!("yesterday")), None);
        assert_eq!(parse_timestamp(&json!(17)), None);
    }

    #[test]
    fn test_scalars_and_truthiness() {
        assert_eq!(scalar_to_string(&json!(17)), Some("17".to_string()));
        assert_eq!(scalar_to_string(&json!(["a"])), None);
        assert!(is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
    }
}
