// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Timelike, Utc};
use familytz_tz::Tz;
use tracing::trace;

use crate::Contact;

/// Minutes since local midnight in `zone` at `at`.
pub fn local_minutes(zone: Tz, at: DateTime<Utc>) -> u16 {
    let local = at.with_timezone(&zone);
    (local.hour() * 60 + local.minute()) as u16
}

/// Whether `contact` is inside their availability window at `at`.
///
/// Contacts without an enforced window are always available. The window is
/// evaluated against the contact's own clock; an unknown zone identifier is
/// evaluated in `reference_zone` instead.
pub fn is_available(contact: &Contact, at: DateTime<Utc>, reference_zone: Tz) -> bool {
    if !contact.window_enforced() {
        return true;
    }

    let minutes = local_minutes(contact.zone(reference_zone), at);
    let available = contact.window.contains(minutes);
    trace!(
        "{} at {} local minutes, window {}-{}: {}",
        contact.id,
        minutes,
        contact.window.start,
        contact.window.end,
        available
    );
    available
}

#[cfg(test)]
mod tests {
    use familytz_test::utc;
    use familytz_tz::resolve;

    use super::*;
    use crate::{ContactColor, MINUTES_PER_DAY};

    fn tz(name: &str) -> Tz {
        resolve(name).unwrap()
    }

    fn contact_in(zone: &str, start: u16, end: u16) -> Contact {
        Contact::new("Test", zone, ContactColor::Green).with_window(start, end)
    }

    #[test]
    fn test_local_minutes() {
        let at = utc(2024, 1, 15, 13, 45);
        assert_eq!(local_minutes(tz("UTC"), at), 13 * 60 + 45);
        assert_eq!(local_minutes(tz("Asia/Tokyo"), at), 22 * 60 + 45);
        assert_eq!(local_minutes(tz("Asia/Kolkata"), at), 19 * 60 + 15);
        // previous calendar day in Los Angeles
        assert_eq!(local_minutes(tz("America/Los_Angeles"), at), 5 * 60 + 45);
    }

    #[test]
    fn test_same_day_window_boundaries() {
        let reference = tz("UTC");
        let contact = contact_in("UTC", 480, 1320);

        assert!(is_available(&contact, utc(2024, 1, 15, 8, 0), reference));
        assert!(!is_available(&contact, utc(2024, 1, 15, 7, 59), reference));
        assert!(is_available(&contact, utc(2024, 1, 15, 22, 0), reference));
        assert!(!is_available(&contact, utc(2024, 1, 15, 22, 1), reference));
    }

    #[test]
    fn test_wrapping_window() {
        let reference = tz("UTC");
        let contact = contact_in("UTC", 1320, 360);

        assert!(is_available(&contact, utc(2024, 1, 15, 23, 59), reference));
        assert!(is_available(&contact, utc(2024, 1, 16, 0, 0), reference));
        assert!(is_available(&contact, utc(2024, 1, 16, 6, 0), reference));
        assert!(!is_available(&contact, utc(2024, 1, 16, 11, 40), reference));
    }

    #[test]
    fn test_window_uses_contact_clock() {
        // 13:30 UTC is 22:30 in Tokyo and 08:30 in New York
        let at = utc(2024, 1, 15, 13, 30);
        let reference = tz("Europe/London");

        assert!(!is_available(&contact_in("Asia/Tokyo", 480, 1320), at, reference));
        assert!(is_available(&contact_in("America/New_York", 480, 1320), at, reference));
    }

    #[test]
    fn test_unknown_zone_uses_reference() {
        let at = utc(2024, 1, 15, 13, 30);
        let contact = contact_in("Nowhere/Special", 480, 600);

        assert!(!is_available(&contact, at, tz("UTC")));
        assert!(is_available(&contact, at, tz("America/New_York")));
    }

    #[test]
    fn test_no_window_always_available() {
        let mut contact = contact_in("UTC", 600, 601);
        contact.has_availability_window = false;
        for hour in 0..24 {
            assert!(is_available(&contact, utc(2024, 1, 15, hour, 30), tz("UTC")));
        }
    }

    #[test]
    fn test_full_day_sentinel_always_available() {
        let contact = contact_in("UTC", 0, MINUTES_PER_DAY);
        assert!(is_available(&contact, utc(2024, 1, 15, 23, 59), tz("UTC")));
    }

    #[test]
    fn test_total_over_every_minute() {
        let window = crate::AvailabilityWindow::new(1320, 360);
        let inside = (0..MINUTES_PER_DAY).filter(|m| window.contains(*m)).count();
        // 22:00..=23:59 plus 00:00..=06:00
        assert_eq!(inside, 120 + 361);
    }
}
