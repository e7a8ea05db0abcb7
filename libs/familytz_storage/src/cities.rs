// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use crate::StoreError;

/// City name to zone identifier lookup, read from `City: Zone` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityIndex {
    zones: HashMap<String, String>,
}

impl CityIndex {
    /// Blank lines and `#` comments are skipped, as are lines without a
    /// non-empty city and zone. Later lines win over earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut zones = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split(':');
            let (Some(city), Some(zone)) = (parts.next(), parts.next()) else {
                continue;
            };
            let (city, zone) = (city.trim(), zone.trim());
            if !city.is_empty() && !zone.is_empty() {
                zones.insert(city.to_lowercase(), zone.to_string());
            }
        }
        Self { zones }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let index = Self::parse(&fs::read_to_string(path)?);
        debug!("Loaded {} cities from {:?}", index.len(), path);
        Ok(index)
    }

    /// Case-insensitive lookup of a city name.
    pub fn lookup(&self, city: &str) -> Option<&str> {
        self.zones
            .get(&city.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
