// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use chrono::{DateTime, Utc};
use familytz_tz::{offset_seconds_at, Tz};

static US_LOCATION_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "America/New_York" => "New York (Eastern)",
    "America/Chicago" => "Chicago (Central)",
    "America/Denver" => "Denver/Salt Lake (Mountain)",
    "America/Phoenix" => "Phoenix (Arizona)",
    "America/Los_Angeles" => "Los Angeles/Portland (Pacific)",
    "America/Anchorage" => "Anchorage (Alaska)",
    "Pacific/Honolulu" => "Honolulu (Hawaii)",
};

/// How far `contact_zone`'s clock is ahead of (`+`) or behind (`-`)
/// `reference_zone`'s clock at `at`, as `H:MM`.
///
/// Both offsets are taken at the same instant, so the label is correct on
/// either side of a DST transition.
pub fn offset_label(contact_zone: Tz, reference_zone: Tz, at: DateTime<Utc>) -> String {
    let diff = offset_seconds_at(contact_zone, at) - offset_seconds_at(reference_zone, at);
    let abs = diff.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;

    let mut label = String::with_capacity(7);
    label.push(if diff >= 0 { '+' } else { '-' });
    let _ = write!(label, "{}:{:02}", hours, minutes);
    label
}

/// A friendly place name for a zone identifier.
///
/// Common US zones use a curated name; `Region/City` identifiers yield the
/// city with underscores as spaces; anything else is returned as is. No
/// validity check is made on the identifier.
pub fn location_name(identifier: &str) -> String {
    if let Some(name) = US_LOCATION_NAMES.get(identifier) {
        return (*name).to_string();
    }

    let mut parts = identifier.split('/').filter(|part| !part.is_empty());
    parts.next();
    match parts.last() {
        Some(city) => city.replace('_', " "),
        None => identifier.to_string(),
    }
}
