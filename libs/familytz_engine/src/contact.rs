// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use familytz_tz::Tz;

/// Minutes in one day; window bounds live in `[0, MINUTES_PER_DAY)`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Opaque contact identifier, stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Color tag shown next to a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactColor {
    #[default]
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Pink,
    Yellow,
    Gray,
}

impl ContactColor {
    pub const ALL: [ContactColor; 8] = [
        ContactColor::Blue,
        ContactColor::Green,
        ContactColor::Red,
        ContactColor::Purple,
        ContactColor::Orange,
        ContactColor::Pink,
        ContactColor::Yellow,
        ContactColor::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactColor::Blue => "blue",
            ContactColor::Green => "green",
            ContactColor::Red => "red",
            ContactColor::Purple => "purple",
            ContactColor::Orange => "orange",
            ContactColor::Pink => "pink",
            ContactColor::Yellow => "yellow",
            ContactColor::Gray => "gray",
        }
    }

    /// Parse a stored color name. Unknown names map to [`ContactColor::Blue`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => ContactColor::Blue,
            "green" => ContactColor::Green,
            "red" => ContactColor::Red,
            "purple" => ContactColor::Purple,
            "orange" => ContactColor::Orange,
            "pink" => ContactColor::Pink,
            "yellow" => ContactColor::Yellow,
            "gray" | "grey" => ContactColor::Gray,
            _ => ContactColor::Blue,
        }
    }
}

impl FromStr for ContactColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for ContactColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a contact's zone comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSource {
    #[default]
    Manual,
    /// The zone follows a shared location feed.
    LocationDerived,
}

/// Daily range of local clock minutes. `start > end` wraps past midnight.
///
/// Bounds are not validated here; callers constructing a window from user or
/// stored input keep both values inside `[0, MINUTES_PER_DAY)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: u16,
    pub end: u16,
}

impl AvailabilityWindow {
    /// The degenerate encoding meaning "no restriction".
    pub const ALWAYS: AvailabilityWindow = AvailabilityWindow {
        start: 0,
        end: MINUTES_PER_DAY,
    };

    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn is_always(&self) -> bool {
        *self == Self::ALWAYS
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether `local_minutes` falls inside the window. Both bounds are
    /// inclusive.
    pub fn contains(&self, local_minutes: u16) -> bool {
        if self.start <= self.end {
            local_minutes >= self.start && local_minutes <= self.end
        } else {
            local_minutes >= self.start || local_minutes <= self.end
        }
    }
}

impl Default for AvailabilityWindow {
    fn default() -> Self {
        Self::ALWAYS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub time_zone_identifier: String,
    pub color: ContactColor,
    pub has_availability_window: bool,
    pub window: AvailabilityWindow,
    pub zone_source: ZoneSource,
    pub apple_id_email: Option<String>,
    pub last_location_update: Option<DateTime<Utc>>,
}

impl Contact {
    /// A new, always-available contact with a fresh id.
    pub fn new(
        name: impl Into<String>,
        time_zone_identifier: impl Into<String>,
        color: ContactColor,
    ) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            time_zone_identifier: time_zone_identifier.into(),
            color,
            has_availability_window: false,
            window: AvailabilityWindow::ALWAYS,
            zone_source: ZoneSource::Manual,
            apple_id_email: None,
            last_location_update: None,
        }
    }

    pub fn with_window(mut self, start: u16, end: u16) -> Self {
        self.has_availability_window = true;
        self.window = AvailabilityWindow::new(start, end);
        self
    }

    /// Mark the zone as location-derived. An empty email is stored as none.
    pub fn with_location_tracking(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.zone_source = ZoneSource::LocationDerived;
        self.apple_id_email = (!email.is_empty()).then_some(email);
        self
    }

    /// The contact's zone, or `fallback` when the identifier is unknown.
    pub fn zone(&self, fallback: Tz) -> Tz {
        familytz_tz::resolve_or(&self.time_zone_identifier, fallback)
    }

    pub fn uses_location_tracking(&self) -> bool {
        self.zone_source == ZoneSource::LocationDerived
    }

    /// Whether the window restricts availability at all.
    pub fn window_enforced(&self) -> bool {
        self.has_availability_window && !self.window.is_always()
    }

    /// Apply a zone derived from the contact's shared location. Manual
    /// contacts are left untouched and `false` is returned.
    pub fn apply_location_zone(&mut self, identifier: &str, at: DateTime<Utc>) -> bool {
        if !self.uses_location_tracking() {
            return false;
        }
        self.time_zone_identifier = identifier.to_string();
        self.last_location_update = Some(at);
        true
    }
}
