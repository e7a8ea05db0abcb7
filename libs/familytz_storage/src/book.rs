// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use familytz_engine::{Contact, ContactId, ContactRow, Tz};
use tracing::{debug, warn};

use crate::{
    codec::{decode_contacts, encode_contacts},
    samples::sample_contacts,
    SharedStore, Storage, StoreError, CONTACTS_KEY,
};

/// The ordered contact list, kept in sync with a [`SharedStore`].
///
/// Every mutation is written back immediately, which in turn notifies the
/// store's listeners. A mutation whose save fails is rolled back.
#[derive(Debug)]
pub struct ContactBook<S> {
    store: SharedStore<S>,
    key: String,
    contacts: Vec<Contact>,
}

impl<S: Storage> ContactBook<S> {
    /// Load the book stored under [`CONTACTS_KEY`].
    pub fn load(store: SharedStore<S>) -> Self {
        Self::load_key(store, CONTACTS_KEY)
    }

    /// Load the book stored under `key`.
    ///
    /// A missing list is seeded with the sample contacts, which are saved. A
    /// list that cannot be read or decoded is left untouched in storage and
    /// the samples are shown instead.
    pub fn load_key(store: SharedStore<S>, key: impl Into<String>) -> Self {
        let mut book = Self {
            store,
            key: key.into(),
            contacts: Vec::new(),
        };

        match book.store.read(&book.key) {
            Ok(Some(bytes)) => match decode_contacts(&bytes) {
                Ok(contacts) => {
                    debug!("Loaded {} contacts from {}", contacts.len(), book.key);
                    book.contacts = contacts;
                },
                Err(err) => {
                    warn!("Could not decode {}, showing sample contacts: {}", book.key, err);
                    book.contacts = sample_contacts();
                },
            },
            Ok(None) => {
                debug!("No contacts under {}, seeding samples", book.key);
                book.contacts = sample_contacts();
                if let Err(err) = book.save() {
                    warn!("Could not save sample contacts: {}", err);
                }
            },
            Err(err) => {
                warn!("Could not read {}, showing sample contacts: {}", book.key, err);
                book.contacts = sample_contacts();
            },
        }
        book
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn store(&self) -> &SharedStore<S> {
        &self.store
    }

    /// One evaluated row per contact, in list order.
    pub fn rows(&self, reference_zone: Tz, at: DateTime<Utc>) -> Vec<ContactRow> {
        self.contacts
            .iter()
            .map(|contact| ContactRow::evaluate(contact, reference_zone, at))
            .collect()
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let bytes = encode_contacts(&self.contacts)?;
        self.store.write(&self.key, &bytes)?;
        debug!("Saved {} contacts to {}", self.contacts.len(), self.key);
        Ok(())
    }

    pub fn add(&mut self, contact: Contact) -> Result<(), StoreError> {
        let previous = self.contacts.clone();
        self.contacts.push(contact);
        self.save_or_restore(previous)
    }

    /// Replace the contact at `index` with `draft`, keeping the existing id.
    /// Returns `false` when `index` is out of range.
    pub fn update(&mut self, index: usize, draft: Contact) -> Result<bool, StoreError> {
        let previous = self.contacts.clone();
        let Some(existing) = self.contacts.get_mut(index) else {
            return Ok(false);
        };
        let id = existing.id.clone();
        *existing = Contact { id, ..draft };
        self.save_or_restore(previous)?;
        Ok(true)
    }

    /// Remove the contacts at `indices`, ignoring duplicates and indices out
    /// of range. Returns how many were removed.
    pub fn remove(&mut self, indices: &[usize]) -> Result<usize, StoreError> {
        let indices = self.valid_indices(indices);
        if indices.is_empty() {
            return Ok(0);
        }
        let previous = self.contacts.clone();
        for index in indices.iter().rev() {
            self.contacts.remove(*index);
        }
        self.save_or_restore(previous)?;
        Ok(indices.len())
    }

    /// Move the contacts at `indices` so they sit, in their current relative
    /// order, before the element that was at position `to` (or at the end when
    /// `to` is past the last element).
    pub fn move_contacts(&mut self, indices: &[usize], to: usize) -> Result<(), StoreError> {
        let indices = self.valid_indices(indices);
        if indices.is_empty() {
            return Ok(());
        }
        let previous = self.contacts.clone();
        let to = to.min(self.contacts.len());
        let before = indices.iter().filter(|index| **index < to).count();

        let mut moved = Vec::with_capacity(indices.len());
        for index in indices.iter().rev() {
            moved.push(self.contacts.remove(*index));
        }
        moved.reverse();

        let at = to - before;
        self.contacts.splice(at..at, moved);
        self.save_or_restore(previous)
    }

    /// Apply a location-derived zone to the contact with `id`. Manual and
    /// unknown contacts are left alone and `false` is returned.
    pub fn refresh_zone(
        &mut self,
        id: &ContactId,
        zone: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let previous = self.contacts.clone();
        let Some(contact) = self.contacts.iter_mut().find(|contact| &contact.id == id) else {
            return Ok(false);
        };
        if !contact.apply_location_zone(zone, at) {
            return Ok(false);
        }
        debug!("Updated zone of {} to {}", id, zone);
        self.save_or_restore(previous)?;
        Ok(true)
    }

    /// Like [`Self::refresh_zone`], with the zone derived from a longitude.
    pub fn refresh_from_longitude(
        &mut self,
        id: &ContactId,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        match familytz_tz::zone_for_longitude(longitude) {
            Some(zone) => self.refresh_zone(id, zone, at),
            None => Ok(false),
        }
    }

    /// Save the current list, or put `previous` back when the save fails so
    /// the book never disagrees with storage.
    fn save_or_restore(&mut self, previous: Vec<Contact>) -> Result<(), StoreError> {
        if let Err(err) = self.save() {
            warn!("Could not save {}, keeping the previous list: {}", self.key, err);
            self.contacts = previous;
            return Err(err);
        }
        Ok(())
    }

    fn valid_indices(&self, indices: &[usize]) -> Vec<usize> {
        let mut valid: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|index| *index < self.contacts.len())
            .collect();
        valid.sort_unstable();
        valid.dedup();
        valid
    }
}
