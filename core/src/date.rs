//! Conversions between the three date shapes the client handles.
//!
//! - wire: whatever ISO-8601 form the service returns (`2026-02-15T10:00:00`,
//!   optionally with fraction or offset);
//! - form input: `YYYY-MM-DDTHH:mm` in local time, what datetime fields
//!   accept and what create/update submit;
//! - display: `YYYY년 MM월 DD일 HH:mm`.
//!
//! Naive values are local wall-clock time. Offsets on the wire are converted
//! to the local zone before formatting.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};

const FORM_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DISPLAY_FORMAT: &str = "%Y년 %m월 %d일 %H:%M";

pub fn to_form_input(date: &NaiveDateTime) -> String {
    date.format(FORM_INPUT_FORMAT).to_string()
}

pub fn to_display(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Inverse of `to_display`, minute precision.
pub fn parse_display(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DISPLAY_FORMAT).ok()
}

/// Parse a service timestamp into local wall-clock time.
pub fn parse_wire(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, FORM_INPUT_FORMAT) {
        return Some(naive);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Display string for a wire timestamp; unparseable input is shown as-is.
pub fn display_wire(value: &str) -> String {
    parse_wire(value)
        .map(|date| to_display(&date))
        .unwrap_or_else(|| value.to_string())
}

/// Form-input string for a wire timestamp; unparseable input is kept as-is.
pub fn form_input_from_wire(value: &str) -> String {
    parse_wire(value)
        .map(|date| to_form_input(&date))
        .unwrap_or_else(|| value.to_string())
}

/// `now + 24h` as a form-input value.
pub fn proposed_date_after(now: NaiveDateTime) -> String {
    to_form_input(&(now + Duration::hours(24)))
}

/// Pre-fill for the creation form: this time tomorrow.
pub fn default_proposed_date() -> String {
    proposed_date_after(Local::now().naive_local())
}
