// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Time zone helpers for familytz.
//!
//! Every zone a contact carries is an IANA identifier string. This crate turns
//! those strings into [`Tz`] values, answers "what is the UTC offset of this
//! zone at this instant", and provides the zone catalog used when a user picks
//! a zone by hand.
//!
//! Resolution never fails at the rendering edge: [`resolve_or`] substitutes the
//! caller's reference zone for identifiers that do not name a known zone.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use familytz_tz::{offset_seconds_at, resolve};
//!
//! let tz = resolve("America/New_York").unwrap();
//! let jan_2024 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! assert_eq!(offset_seconds_at(tz, jan_2024), -5 * 3600);
//! ```

mod catalog;
mod zone;

pub use catalog::{
    display_name, is_common_us_zone, known_identifiers, search, zone_for_longitude,
    COMMON_US_ZONES,
};
pub use chrono_tz::Tz;
pub use zone::{offset_seconds_at, resolve, resolve_or, system_zone, ZoneError};

/// The UTC zone.
pub const UTC: Tz = chrono_tz::UTC;
