// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The app and the widget open the same suite from separate stores.

use std::fs;

use familytz_engine::ContactColor;
use familytz_storage::{
    decode_contacts, ContactBook, FileStorage, SharedStore, Storage, APP_GROUP, CONTACTS_KEY,
};
use familytz_test::{given_contact, given_dir, utc};

#[test]
fn test_widget_sees_app_edits() {
    let dir = given_dir();

    let mut app = ContactBook::load(SharedStore::new(FileStorage::new(&dir), APP_GROUP));
    app.add(given_contact("Grandma", "Australia/Adelaide")).unwrap();
    app.remove(&[1]).unwrap();

    let widget = ContactBook::load(SharedStore::new(FileStorage::new(&dir), APP_GROUP));
    assert_eq!(widget.contacts(), app.contacts());
    assert_eq!(widget.len(), 3);
    assert_eq!(widget.contacts()[2].name, "Grandma");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_legacy_blob_is_upgraded_on_first_write() {
    let dir = given_dir();
    let storage = FileStorage::new(&dir);
    storage
        .write(
            APP_GROUP,
            CONTACTS_KEY,
            br#"[{"id":"OLD-1","name":"Jane","timeZone":"America/New_York","color":"grey",
                 "email":"","useLocationForTimeZone":false,
                 "availableStartTime":0,"availableEndTime":0}]"#,
        )
        .unwrap();

    let mut book = ContactBook::load(SharedStore::new(storage, APP_GROUP));
    assert_eq!(book.len(), 1);
    assert_eq!(book.contacts()[0].color, ContactColor::Gray);
    assert!(!book.contacts()[0].has_availability_window);

    book.add(given_contact("John", "Europe/London")).unwrap();

    let bytes = fs::read(dir.join(APP_GROUP).join("savedContacts.json")).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("\"timeZoneIdentifier\":\"America/New_York\""));
    assert!(!text.contains("\"timeZone\":"));
    assert_eq!(decode_contacts(&bytes).unwrap()[0].id.as_str(), "OLD-1");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_rows_for_stored_contacts() {
    let dir = given_dir();
    let mut book = ContactBook::load(SharedStore::new(FileStorage::new(&dir), APP_GROUP));
    book.remove(&[0, 1, 2]).unwrap();
    book.add(given_contact("Night owl", "Asia/Kolkata").with_window(1320, 360))
        .unwrap();

    let reference = familytz_tz::resolve("UTC").unwrap();
    let rows = book.rows(reference, utc(2024, 1, 15, 20, 0));
    assert_eq!(rows.len(), 1);
    // 20:00 UTC is 01:30 the next day in Kolkata
    assert_eq!(rows[0].local_time, "1:30 AM");
    assert_eq!(rows[0].offset_label, "+5:30");
    assert_eq!(rows[0].date_label.as_deref(), Some("Tuesday, Jan 16"));
    assert!(rows[0].available);
    assert_eq!(rows[0].window_label, "10:00 PM - 6:00 AM");

    fs::remove_dir_all(dir).unwrap();
}
