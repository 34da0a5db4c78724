//! Environment attributes (when and where a request happens)

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// First hour (inclusive) of the default business day
pub const DEFAULT_BUSINESS_START_HOUR: u32 = 9;

/// Last hour (exclusive) of the default business day
pub const DEFAULT_BUSINESS_END_HOUR: u32 = 17;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub timestamp: DateTime<Utc>,

    pub business_hours: bool,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}

impl Environment {
    /// Environment at `timestamp`, deriving the business-hours flag from the
    /// default 09:00-17:00 weekday window.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self::with_window(
            timestamp,
            DEFAULT_BUSINESS_START_HOUR,
            DEFAULT_BUSINESS_END_HOUR,
        )
    }

    /// Environment at `timestamp` with a custom `[start_hour, end_hour)` window
    pub fn with_window(timestamp: DateTime<Utc>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            timestamp,
            business_hours: is_business_hours(&timestamp, start_hour, end_hour),
            ip_address: None,
            location: None,
        }
    }

    /// Environment at `timestamp` with an explicit business-hours flag
    pub fn new(timestamp: DateTime<Utc>, business_hours: bool) -> Self {
        Self {
            timestamp,
            business_hours,
            ip_address: None,
            location: None,
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Monday to Friday, `start_hour <= hour < end_hour`
pub fn is_business_hours(timestamp: &DateTime<Utc>, start_hour: u32, end_hour: u32) -> bool {
    if matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let hour = timestamp.hour();
    start_hour <= hour && hour < end_hour
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekday_business_hours() {
        // 2024-03-06 is a Wednesday
        let morning = Utc.with_ymd_and_hms(2024, 3, 6, 10, 30, 0).unwrap();
        assert!(Environment::at(morning).business_hours);

        let opening = Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap();
        assert!(Environment::at(opening).business_hours);

        let closing = Utc.with_ymd_and_hms(2024, 3, 6, 17, 0, 0).unwrap();
        assert!(!Environment::at(closing).business_hours);

        let night = Utc.with_ymd_and_hms(2024, 3, 6, 23, 0, 0).unwrap();
        assert!(!Environment::at(night).business_hours);
    }

    #[test]
    fn test_weekend_is_never_business_hours() {
        // 2024-03-09 is a Saturday
        let saturday = Utc.with_ymd_and_hms(2024, 3, 9, 11, 0, 0).unwrap();
        assert!(!Environment::at(saturday).business_hours);
    }

    #[test]
    fn test_custom_window() {
        let early = Utc.with_ymd_and_hms(2024, 3, 6, 7, 0, 0).unwrap();
        assert!(!Environment::at(early).business_hours);
        assert!(Environment::with_window(early, 7, 19).business_hours);
    }

    #[test]
    fn test_optional_fields() {
        let env = Environment::new(Utc::now(), true)
            .with_ip_address("10.0.0.1")
            .with_location("downtown");
        assert_eq!(env.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(env.location.as_deref(), Some("downtown"));
    }
}
