// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Persistence for the contact list shared between the app and its widget.
//!
//! ```
//! use familytz_storage::{ContactBook, MemoryStorage, SharedStore, APP_GROUP};
//!
//! let book = ContactBook::load(SharedStore::new(MemoryStorage::new(), APP_GROUP));
//! assert_eq!(book.len(), 3);
//! ```

mod book;
mod cities;
pub mod codec;
mod samples;
mod shared;
mod storage;

pub use self::book::ContactBook;
pub use self::cities::CityIndex;
pub use self::codec::{decode_contacts, encode_contacts};
pub use self::samples::sample_contacts;
pub use self::shared::SharedStore;
pub use self::storage::{FileStorage, MemoryStorage, Storage};

/// Suite shared by the app and its widget.
pub const APP_GROUP: &str = "group.com.familytimezones.app";

/// Key holding the encoded contact list.
pub const CONTACTS_KEY: &str = "savedContacts";

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid contact list: {0}")]
    Json(#[from] simd_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("invalid storage name: {0:?}")]
    InvalidName(String),
}
