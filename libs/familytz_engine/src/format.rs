// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Display strings for the contact list and widget: 12-hour clocks, window
//! labels, the "other day" date label and the location tracking status.

use std::fmt::Write;

use chrono::{DateTime, Timelike, Utc};
use familytz_tz::Tz;

use crate::{AvailabilityWindow, Contact};

pub const ALWAYS_AVAILABLE: &str = "Always available";

/// Render minutes since midnight as a 12-hour clock, e.g. `8:05 PM`.
///
/// No zone conversion happens here; `minutes` is already a local clock value.
pub fn format_clock(minutes: u16) -> String {
    let hour = minutes / 60;
    let minute = minutes % 60;
    let hour12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let period = if hour < 12 { "AM" } else { "PM" };

    let mut result = String::with_capacity(8);
    let _ = write!(result, "{}:{:02} {}", hour12, minute, period);
    result
}

/// Render a window as `"8:00 AM - 10:00 PM"`, or [`ALWAYS_AVAILABLE`] for the
/// full-day sentinel.
pub fn format_window(start: u16, end: u16) -> String {
    let window = AvailabilityWindow::new(start, end);
    if window.is_always() {
        return ALWAYS_AVAILABLE.to_string();
    }
    let mut result = format_clock(start);
    result.push_str(" - ");
    result.push_str(&format_clock(end));
    result
}

impl Contact {
    /// The window label shown under the contact's name.
    pub fn window_label(&self) -> String {
        if self.window_enforced() {
            format_window(self.window.start, self.window.end)
        } else {
            ALWAYS_AVAILABLE.to_string()
        }
    }
}

/// Current time in `zone` as a short 12-hour clock.
pub fn formatted_time(zone: Tz, at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&zone);
    format_clock((local.hour() * 60 + local.minute()) as u16)
}

/// The contact's calendar date, e.g. `Wednesday, Jan 3`, but only when it is
/// not the same day as in `reference_zone`.
pub fn formatted_date(contact_zone: Tz, reference_zone: Tz, at: DateTime<Utc>) -> Option<String> {
    let contact_local = at.with_timezone(&contact_zone);
    let reference_local = at.with_timezone(&reference_zone);
    if contact_local.date_naive() == reference_local.date_naive() {
        return None;
    }
    Some(contact_local.format("%A, %b %-d").to_string())
}

/// Short relative phrase for `then` as seen from `now`: `now`, `5 min. ago`,
/// `in 2 hr.`, `3 days ago`.
pub fn relative_phrase(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let secs = delta.unsigned_abs();

    let amount = match secs {
        0 => return "now".to_string(),
        1..=59 => format!("{} sec.", secs),
        60..=3599 => format!("{} min.", secs / 60),
        3600..=86399 => format!("{} hr.", secs / 3600),
        _ => {
            let days = secs / 86400;
            format!("{} {}", days, if days == 1 { "day" } else { "days" })
        },
    };

    if delta > 0 {
        amount + " ago"
    } else {
        format!("in {}", amount)
    }
}

/// How the contact's zone is maintained, for the detail line under a row.
pub fn tracking_status(contact: &Contact, now: DateTime<Utc>) -> String {
    if !contact.uses_location_tracking() {
        return "Manual time zone".to_string();
    }
    match contact.last_location_update {
        Some(updated) => format!("Auto-updated {}", relative_phrase(updated, now)),
        None => "Auto-update enabled, waiting for location".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use familytz_test::utc;
    use familytz_tz::resolve;

    use super::*;
    use crate::{ContactColor, MINUTES_PER_DAY};

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "12:00 AM");
        assert_eq!(format_clock(5), "12:05 AM");
        assert_eq!(format_clock(480), "8:00 AM");
        assert_eq!(format_clock(720), "12:00 PM");
        assert_eq!(format_clock(779), "12:59 PM");
        assert_eq!(format_clock(780), "1:00 PM");
        assert_eq!(format_clock(1439), "11:59 PM");
    }

    #[test]
    fn test_format_window() {
        assert_eq!(format_window(480, 1320), "8:00 AM - 10:00 PM");
        assert_eq!(format_window(1320, 360), "10:00 PM - 6:00 AM");
        assert_eq!(format_window(0, MINUTES_PER_DAY), ALWAYS_AVAILABLE);
        assert_eq!(format_window(0, 0), "12:00 AM - 12:00 AM");
    }

    #[test]
    fn test_window_label() {
        let contact = Contact::new("Jane", "UTC", ContactColor::Blue);
        assert_eq!(contact.window_label(), ALWAYS_AVAILABLE);

        let contact = contact.with_window(540, 1050);
        assert_eq!(contact.window_label(), "9:00 AM - 5:30 PM");
    }

    #[test]
    fn test_formatted_time() {
        let at = utc(2024, 1, 15, 13, 5);
        assert_eq!(formatted_time(resolve("UTC").unwrap(), at), "1:05 PM");
        assert_eq!(formatted_time(resolve("Asia/Tokyo").unwrap(), at), "10:05 PM");
        assert_eq!(formatted_time(resolve("America/New_York").unwrap(), at), "8:05 AM");
    }

    #[test]
    fn test_formatted_date_only_when_day_differs() {
        let london = resolve("Europe/London").unwrap();
        let tokyo = resolve("Asia/Tokyo").unwrap();

        // 2024-01-03 10:00 UTC: both zones on Wednesday the 3rd
        assert_eq!(formatted_date(tokyo, london, utc(2024, 1, 3, 10, 0)), None);
        // 2024-01-03 20:00 UTC: Thursday the 4th in Tokyo
        assert_eq!(
            formatted_date(tokyo, london, utc(2024, 1, 3, 20, 0)),
            Some("Thursday, Jan 4".to_string())
        );
        assert_eq!(
            formatted_date(london, tokyo, utc(2024, 1, 3, 20, 0)),
            Some("Wednesday, Jan 3".to_string())
        );
    }

    #[test]
    fn test_relative_phrase() {
        let now = utc(2024, 1, 15, 12, 0);
        assert_eq!(relative_phrase(now, now), "now");
        assert_eq!(relative_phrase(now - Duration::seconds(42), now), "42 sec. ago");
        assert_eq!(relative_phrase(now - Duration::minutes(5), now), "5 min. ago");
        assert_eq!(relative_phrase(now - Duration::hours(2), now), "2 hr. ago");
        assert_eq!(relative_phrase(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_phrase(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_phrase(now + Duration::minutes(10), now), "in 10 min.");
    }

    #[test]
    fn test_tracking_status() {
        let now = utc(2024, 1, 15, 12, 0);
        let manual = Contact::new("Jane", "UTC", ContactColor::Blue);
        assert_eq!(tracking_status(&manual, now), "Manual time zone");

        let mut tracked = manual.with_location_tracking("jane@example.com");
        assert_eq!(
            tracking_status(&tracked, now),
            "Auto-update enabled, waiting for location"
        );

        tracked.last_location_update = Some(now - Duration::minutes(15));
        assert_eq!(tracking_status(&tracked, now), "Auto-updated 15 min. ago");
    }
}
