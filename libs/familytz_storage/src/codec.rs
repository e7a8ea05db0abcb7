// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! JSON encoding of a contact list.
//!
//! Writers always emit the current record layout. Readers accept every layout
//! that has been written to the shared suite over time: the first app model
//! (`timeZone`, `email`, `useLocationForTimeZone`, `0/0` meaning always), the
//! storage model with an explicit window flag, the trimmed widget model and
//! the picker model encoding "always" as `0/1440`.

use chrono::{DateTime, SecondsFormat, Utc};
use familytz_engine::{AvailabilityWindow, Contact, ContactColor, ContactId, ZoneSource};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::CodecError;

const RECORD_VERSION: u32 = 2;

/// Highest minute a decoded window bound may carry.
const LAST_MINUTE: i64 = 1439;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredContact {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(alias = "timeZone")]
    time_zone_identifier: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default, alias = "useLocationForTimeZone")]
    use_location_tracking: bool,
    #[serde(default, alias = "email")]
    apple_id_email: Option<String>,
    #[serde(default, with = "timestamp")]
    last_location_update: Option<DateTime<Utc>>,
    #[serde(default)]
    has_availability_window: Option<bool>,
    #[serde(default)]
    available_start_time: Option<i64>,
    #[serde(default)]
    available_end_time: Option<i64>,
}

impl From<&Contact> for StoredContact {
    fn from(contact: &Contact) -> Self {
        Self {
            version: Some(RECORD_VERSION),
            id: Some(contact.id.to_string()),
            name: contact.name.clone(),
            time_zone_identifier: contact.time_zone_identifier.clone(),
            color: Some(contact.color.as_str().to_string()),
            use_location_tracking: contact.uses_location_tracking(),
            apple_id_email: contact.apple_id_email.clone(),
            last_location_update: contact.last_location_update,
            has_availability_window: Some(contact.has_availability_window),
            available_start_time: Some(contact.window.start.into()),
            available_end_time: Some(contact.window.end.into()),
        }
    }
}

impl From<StoredContact> for Contact {
    fn from(record: StoredContact) -> Self {
        if let Some(version) = record.version.filter(|version| *version > RECORD_VERSION) {
            debug!("Reading version {} record for {}", version, record.name);
        }
        // the first app model wrote "" for "no email"
        let legacy = record.version.is_none();
        let (start, end) = (record.available_start_time, record.available_end_time);

        let has_availability_window = match record.has_availability_window {
            Some(flag) => flag,
            None => match (start, end) {
                (Some(0), Some(0)) | (Some(0), Some(1440)) => false,
                (Some(_), Some(_)) => true,
                _ => false,
            },
        };

        let window = match (start, end) {
            (Some(0), Some(1440)) => AvailabilityWindow::ALWAYS,
            (Some(start), Some(end)) => {
                AvailabilityWindow::new(clamp_minute(start), clamp_minute(end))
            },
            _ => AvailabilityWindow::ALWAYS,
        };

        let zone_source = if record.use_location_tracking {
            ZoneSource::LocationDerived
        } else {
            ZoneSource::Manual
        };

        Contact {
            id: record.id.map(ContactId::from).unwrap_or_default(),
            name: record.name,
            time_zone_identifier: record.time_zone_identifier,
            color: record
                .color
                .as_deref()
                .map(ContactColor::from_name)
                .unwrap_or_default(),
            has_availability_window,
            window,
            zone_source,
            apple_id_email: record
                .apple_id_email
                .filter(|email| !legacy || !email.is_empty()),
            last_location_update: record.last_location_update,
        }
    }
}

fn clamp_minute(value: i64) -> u16 {
    value.clamp(0, LAST_MINUTE) as u16
}

/// Serialize `contacts` as the canonical JSON array.
pub fn encode_contacts(contacts: &[Contact]) -> Result<Vec<u8>, CodecError> {
    let records: Vec<StoredContact> = contacts.iter().map(StoredContact::from).collect();
    Ok(simd_json::serde::to_vec(&records)?)
}

/// Parse a stored contact list written by any revision of the app.
pub fn decode_contacts(bytes: &[u8]) -> Result<Vec<Contact>, CodecError> {
    // simd-json parses in place
    let mut json = bytes.to_vec();
    let records: Vec<StoredContact> = simd_json::serde::from_slice(&mut json)?;
    Ok(records.into_iter().map(Contact::from).collect())
}

/// `lastLocationUpdate` is written as RFC 3339 and read from either RFC 3339
/// or seconds since the Apple reference date.
mod timestamp {
    use super::*;

    /// 2001-01-01T00:00:00Z as a Unix timestamp.
    const REFERENCE_DATE_UNIX: i64 = 978_307_200;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Seconds(f64),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<RawTimestamp> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(RawTimestamp::Text(text)) => DateTime::parse_from_rfc3339(&text)
                .map(|at| Some(at.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
            Some(RawTimestamp::Seconds(seconds)) => from_reference_seconds(seconds)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom("timestamp out of range")),
        }
    }

    pub(super) fn from_reference_seconds(seconds: f64) -> Option<DateTime<Utc>> {
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
            return None;
        }
        let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
        let unix = (whole as i64).checked_add(REFERENCE_DATE_UNIX)?;
        DateTime::from_timestamp(unix, nanos)
    }
}
