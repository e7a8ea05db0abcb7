// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use familytz_tz::Tz;

use crate::{
    availability::is_available,
    format::{formatted_date, formatted_time, tracking_status},
    offset::{location_name, offset_label},
    Contact, ContactColor, ContactId,
};

/// Everything a list row or widget line shows for one contact at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub id: ContactId,
    pub name: String,
    pub color: ContactColor,
    /// Identifier of the zone actually used, after fallback.
    pub zone: &'static str,
    pub location_name: String,
    pub local_time: String,
    pub offset_label: String,
    pub date_label: Option<String>,
    pub available: bool,
    pub window_label: String,
    pub tracking_status: String,
}

impl ContactRow {
    pub fn evaluate(contact: &Contact, reference_zone: Tz, at: DateTime<Utc>) -> Self {
        let zone = contact.zone(reference_zone);
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            color: contact.color,
            zone: zone.name(),
            location_name: location_name(zone.name()),
            local_time: formatted_time(zone, at),
            offset_label: offset_label(zone, reference_zone, at),
            date_label: formatted_date(zone, reference_zone, at),
            available: is_available(contact, at, reference_zone),
            window_label: contact.window_label(),
            tracking_status: tracking_status(contact, at),
        }
    }
}
