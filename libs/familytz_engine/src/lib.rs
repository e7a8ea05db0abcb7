// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Contact model and the time zone availability engine.
//!
//! Everything in this crate is a pure function of its inputs: a [`Contact`],
//! an instant and the caller's reference zone. Nothing reads the wall clock or
//! the host zone implicitly, so the app and the widget can evaluate the same
//! contacts concurrently without coordination.
//!
//! # Operations
//!
//! - [`offset_label`]: signed `H:MM` difference between two zones at an instant
//! - [`location_name`]: friendly name derived from a zone identifier
//! - [`is_available`]: whether the contact's local clock is inside their window
//! - [`format_window`]: 12-hour rendering of an availability window
//!
//! [`ContactRow::evaluate`] bundles all of them for a single rendered row.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use familytz_engine::{offset_label, Contact, ContactColor};
//!
//! let contact = Contact::new("Akira", "Asia/Tokyo", ContactColor::Red).with_window(480, 1320);
//! let reference = familytz_tz::resolve("Europe/London").unwrap();
//! let at = Utc.with_ymd_and_hms(2024, 1, 15, 13, 30, 0).unwrap();
//!
//! assert_eq!(offset_label(contact.zone(reference), reference, at), "+9:00");
//! assert!(!familytz_engine::is_available(&contact, at, reference)); // 22:30 in Tokyo
//! ```

mod availability;
mod contact;
mod format;
mod offset;
mod row;

pub use availability::{is_available, local_minutes};
pub use contact::{
    AvailabilityWindow, Contact, ContactColor, ContactId, ZoneSource, MINUTES_PER_DAY,
};
pub use format::{
    format_clock, format_window, formatted_date, formatted_time, relative_phrase,
    tracking_status, ALWAYS_AVAILABLE,
};
pub use offset::{location_name, offset_label};
pub use row::ContactRow;

pub use familytz_tz::Tz;
