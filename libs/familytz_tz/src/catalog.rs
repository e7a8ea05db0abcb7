// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Zone catalog used by the zone picker: the list of known identifiers, the
//! common US zones shown first, picker labels and alias search.

/// The most common US zones, in the order the picker lists them.
pub const COMMON_US_ZONES: [&str; 7] = [
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Phoenix",
    "America/Los_Angeles",
    "America/Anchorage",
    "Pacific/Honolulu",
];

static PICKER_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "America/New_York" => "Eastern Time (New York)",
    "America/Chicago" => "Central Time (Chicago)",
    "America/Denver" => "Mountain Time (Denver, Salt Lake City)",
    "America/Phoenix" => "Mountain Time - No DST (Phoenix)",
    "America/Los_Angeles" => "Pacific Time (Los Angeles, Portland)",
    "America/Anchorage" => "Alaska Time (Anchorage)",
    "Pacific/Honolulu" => "Hawaii Time (Honolulu)",
};

static ALIASES: &[(&str, &[&str])] = &[
    ("America/New_York", &["eastern", "est", "edt", "east coast"]),
    ("America/Chicago", &["central", "cst", "cdt"]),
    (
        "America/Denver",
        &["mountain", "mst", "mdt", "utah", "salt lake", "salt lake city", "colorado"],
    ),
    ("America/Phoenix", &["arizona", "mst"]),
    (
        "America/Los_Angeles",
        &["pacific", "pst", "pdt", "west coast", "portland", "oregon", "california"],
    ),
    ("America/Anchorage", &["alaska", "akst", "akdt"]),
    ("Pacific/Honolulu", &["hawaii", "hst", "hdt"]),
];

/// All identifiers known to the zone database, sorted.
pub fn known_identifiers() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names.dedup();
    names
}

pub fn is_common_us_zone(identifier: &str) -> bool {
    COMMON_US_ZONES.contains(&identifier)
}

/// Label shown for a zone in the picker.
///
/// Common US zones get a descriptive name; other region/city identifiers
/// render as `"City, Region"`; anything else is returned unchanged.
pub fn display_name(identifier: &str) -> String {
    if let Some(name) = PICKER_NAMES.get(identifier) {
        return (*name).to_string();
    }

    let mut parts = identifier.split('/').filter(|part| !part.is_empty());
    match (parts.next(), parts.last()) {
        (Some(region), Some(city)) => {
            format!("{}, {}", city.replace('_', " "), region.replace('_', " "))
        },
        _ => identifier.to_string(),
    }
}

fn alias_matches(identifier: &str, query: &str) -> bool {
    ALIASES
        .iter()
        .find(|(zone, _)| *zone == identifier)
        .is_some_and(|(_, aliases)| aliases.iter().any(|alias| alias.contains(query)))
}

/// Filter the known zones by a free-text query.
///
/// An empty query lists the common US zones first, followed by every other
/// zone. Otherwise a zone matches when its picker label contains the query or
/// one of its aliases does, ignoring case.
pub fn search(query: &str) -> Vec<&'static str> {
    let all = known_identifiers();
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        let mut zones: Vec<&'static str> = COMMON_US_ZONES.to_vec();
        zones.extend(all.into_iter().filter(|tz| !is_common_us_zone(tz)));
        return zones;
    }

    all.into_iter()
        .filter(|tz| display_name(tz).to_lowercase().contains(&query) || alias_matches(tz, &query))
        .collect()
}

/// Coarse zone guess for a longitude in degrees, used when a contact's zone
/// follows a shared location. `None` leaves the current zone in place.
pub fn zone_for_longitude(longitude: f64) -> Option<&'static str> {
    if longitude < -30.0 {
        Some(if longitude < -115.0 {
            "America/Los_Angeles"
        } else if longitude < -90.0 {
            "America/Denver"
        } else if longitude < -75.0 {
            "America/Chicago"
        } else {
            "America/New_York"
        })
    } else if longitude > 100.0 {
        Some(if longitude > 135.0 {
            "Asia/Tokyo"
        } else {
            "Asia/Shanghai"
        })
    } else if longitude > 0.0 {
        Some("Europe/London")
    } else {
        None
    }
}
