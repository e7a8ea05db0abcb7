// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

/// Error returned when an identifier does not name a known zone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    #[error("Invalid timezone: {0}")]
    Unresolvable(String),
}

/// Resolve an IANA identifier such as `"Asia/Tokyo"`.
pub fn resolve(identifier: &str) -> Result<Tz, ZoneError> {
    identifier
        .parse::<Tz>()
        .map_err(|_| ZoneError::Unresolvable(identifier.to_string()))
}

/// Resolve an identifier, substituting `fallback` when it is not a known zone.
pub fn resolve_or(identifier: &str, fallback: Tz) -> Tz {
    match resolve(identifier) {
        Ok(tz) => tz,
        Err(err) => {
            debug!("{}; using {}", err, fallback.name());
            fallback
        },
    }
}

/// UTC offset of `tz` in seconds at the given instant. Positive values are
/// east of UTC.
pub fn offset_seconds_at(tz: Tz, at: DateTime<Utc>) -> i32 {
    at.with_timezone(&tz).offset().fix().local_minus_utc()
}

/// The zone the host is configured for, or UTC when it cannot be determined.
pub fn system_zone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => resolve_or(&name, crate::UTC),
        Err(err) => {
            trace!("System timezone unavailable: {}", err);
            crate::UTC
        },
    }
}
