// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use familytz_engine::{Contact, ContactColor};

/// Zones covering whole, half and quarter hour offsets on both sides of UTC,
/// with and without DST, north and south.
pub const SAMPLE_ZONES: [&str; 12] = [
    "UTC",
    "America/New_York",
    "America/Los_Angeles",
    "America/Phoenix",
    "America/St_Johns",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Kolkata",
    "Asia/Kathmandu",
    "Asia/Tokyo",
    "Australia/Adelaide",
    "Pacific/Kiritimati",
];

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// Instants spread over a year, including both sides of the 2024 US and EU
/// DST transitions and a few minutes around UTC midnight.
pub fn sample_instants() -> Vec<DateTime<Utc>> {
    vec![
        utc(2024, 1, 1, 0, 0),
        utc(2024, 1, 15, 23, 59),
        utc(2024, 3, 10, 6, 59),
        utc(2024, 3, 10, 7, 0),
        utc(2024, 3, 20, 12, 0),
        utc(2024, 3, 31, 0, 59),
        utc(2024, 3, 31, 1, 0),
        utc(2024, 7, 4, 16, 30),
        utc(2024, 10, 27, 1, 0),
        utc(2024, 11, 3, 6, 0),
        utc(2024, 12, 31, 23, 45),
    ]
}

pub fn given_contact(name: &str, zone: &str) -> Contact {
    Contact::new(name, zone, ContactColor::Blue)
}

/// A fresh, empty directory under the system temp dir.
pub fn given_dir() -> PathBuf {
    let path = std::env::temp_dir().join(format!("familytz-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    path
}
