// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use familytz_engine::{Contact, ContactColor};

/// 08:00
const SAMPLE_START: u16 = 8 * 60;
/// 22:00
const SAMPLE_END: u16 = 22 * 60;

/// Contacts shown on first launch, each with a fresh id.
pub fn sample_contacts() -> Vec<Contact> {
    [
        ("Jane (New York)", "America/New_York", ContactColor::Blue),
        ("John (London)", "Europe/London", ContactColor::Green),
        ("Akira (Tokyo)", "Asia/Tokyo", ContactColor::Red),
    ]
    .into_iter()
    .map(|(name, zone, color)| Contact::new(name, zone, color).with_window(SAMPLE_START, SAMPLE_END))
    .collect()
}
