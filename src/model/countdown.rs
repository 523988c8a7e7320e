//! Countdown derivation
//!
//! Pure functions from (event date, today) to display strings. Nothing here
//! is stored; the header recomputes these on every tick and date change.

use chrono::NaiveDate;

/// Storage format for the event date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder shown when no (valid) event date is set
const NO_DATE: &str = "-- days";

pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Whole-day countdown label: "N days" for today or a future date,
/// "Event passed" once the date is behind us, "-- days" when unset
pub fn countdown_label(event_date: Option<&str>, today: NaiveDate) -> String {
    let event = match event_date.and_then(parse_event_date) {
        Some(date) => date,
        None => return NO_DATE.to_string(),
    };

    let diff = (event - today).num_days();
    if diff >= 0 {
        format!("{} days", diff)
    } else {
        "Event passed".to_string()
    }
}

/// Long-form date line for the header, e.g. "Event date: November 14, 2025"
pub fn event_date_label(event_date: Option<&str>) -> Option<String> {
    let date = event_date.and_then(parse_event_date)?;
    Some(format!("Event date: {}", date.format("%B %-d, %Y")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_countdown_same_day_is_zero() {
        let today = day(2025, 11, 14);
        assert_eq!(countdown_label(Some("2025-11-14"), today), "0 days");
    }

    #[test]
    fn test_countdown_five_days_ahead() {
        let today = day(2025, 11, 9);
        assert_eq!(countdown_label(Some("2025-11-14"), today), "5 days");
    }

    #[test]
    fn test_countdown_passed() {
        let today = day(2025, 11, 15);
        assert_eq!(countdown_label(Some("2025-11-14"), today), "Event passed");
    }

    #[test]
    fn test_countdown_without_date() {
        let today = day(2025, 11, 14);
        assert_eq!(countdown_label(None, today), "-- days");
    }

    #[test]
    fn test_countdown_unparsable_date_shows_placeholder() {
        let today = day(2025, 11, 14);
        assert_eq!(countdown_label(Some("next friday"), today), "-- days");
    }

    #[test]
    fn test_event_date_label_formatting() {
        assert_eq!(
            event_date_label(Some("2025-11-14")).as_deref(),
            Some("Event date: November 14, 2025")
        );
        assert_eq!(event_date_label(None), None);
    }
}
