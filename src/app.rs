// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Write, path::PathBuf};

use chrono::{DateTime, Utc};
use familytz_engine::{Contact, ContactRow, Tz};
use familytz_storage::{CityIndex, ContactBook, FileStorage, SharedStore, APP_GROUP};
use tracing::{debug, trace};

use crate::{
    cli::{CliError, Command, Options},
    environment::{
        ENV_FAMILYTZ_CITIES, ENV_FAMILYTZ_STORE_DIR, ENV_FAMILYTZ_SUITE, ENV_FAMILYTZ_ZONE,
        ENV_HOME,
    },
};

const STORE_DIR_NAME: &str = ".familytz";

/// Everything a command needs, with flags resolved against the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store_dir: PathBuf,
    pub suite: String,
    pub reference_zone: Tz,
    pub at: DateTime<Utc>,
    pub cities: Option<PathBuf>,
}

impl Config {
    /// Flags win over environment variables, which win over defaults.
    pub fn resolve<F>(options: &Options, env: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_dir = match (&options.store, env(ENV_FAMILYTZ_STORE_DIR)) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => PathBuf::from(dir),
            (None, None) => env(ENV_HOME)
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(STORE_DIR_NAME),
        };

        let reference_zone = match options.zone.clone().or_else(|| env(ENV_FAMILYTZ_ZONE)) {
            Some(name) => {
                familytz_tz::resolve(&name).map_err(|_| CliError::UnknownZone(name))?
            },
            None => familytz_tz::system_zone(),
        };

        Ok(Self {
            store_dir,
            suite: env(ENV_FAMILYTZ_SUITE).unwrap_or_else(|| APP_GROUP.to_string()),
            reference_zone,
            at: options.at.unwrap_or_else(Utc::now),
            cities: options.cities.clone().or_else(|| env(ENV_FAMILYTZ_CITIES).map(PathBuf::from)),
        })
    }

    fn open_book(&self) -> ContactBook<FileStorage> {
        debug!("Opening suite {} in {:?}", self.suite, self.store_dir);
        let store = SharedStore::new(FileStorage::new(&self.store_dir), &self.suite);
        ContactBook::load(store)
    }

    /// A zone identifier as typed, or the zone of a known city.
    fn zone_for(&self, input: &str) -> Result<String, CliError> {
        if let Ok(tz) = familytz_tz::resolve(input) {
            return Ok(tz.name().to_string());
        }
        if let Some(path) = &self.cities {
            let index = CityIndex::from_file(path)?;
            if let Some(zone) = index.lookup(input) {
                trace!("City {} is in {}", input, zone);
                if let Ok(tz) = familytz_tz::resolve(zone) {
                    return Ok(tz.name().to_string());
                }
            }
        }
        Err(CliError::UnknownZone(input.to_string()))
    }
}

/// Run `command` and return what it prints.
pub fn run(command: Command, config: &Config) -> Result<String, CliError> {
    match command {
        Command::List => {
            let book = config.open_book();
            Ok(render_rows(&book.rows(config.reference_zone, config.at)))
        },
        Command::Zones { query } => Ok(render_zones(&query)),
        Command::Add {
            name,
            zone,
            color,
            window,
        } => {
            let zone = config.zone_for(&zone)?;
            let mut contact = Contact::new(name, zone, color);
            if let Some((start, end)) = window {
                contact = contact.with_window(start, end);
            }
            let mut book = config.open_book();
            book.add(contact)?;
            Ok(render_rows(&book.rows(config.reference_zone, config.at)))
        },
        Command::Remove { index } => {
            let mut book = config.open_book();
            if book.remove(&[index - 1])? == 0 {
                return Err(CliError::IndexOutOfRange(index));
            }
            Ok(render_rows(&book.rows(config.reference_zone, config.at)))
        },
        Command::Move { from, to } => {
            let mut book = config.open_book();
            for position in [from, to] {
                if position > book.len() {
                    return Err(CliError::IndexOutOfRange(position));
                }
            }
            let (from, to) = (from - 1, to - 1);
            // move_contacts inserts before the element at the destination
            let destination = if to > from { to + 1 } else { to };
            book.move_contacts(&[from], destination)?;
            Ok(render_rows(&book.rows(config.reference_zone, config.at)))
        },
        Command::Version | Command::Help => Ok(String::new()),
    }
}

pub fn render_rows(rows: &[ContactRow]) -> String {
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<24} {:>8}  {:>6}  {}",
            index + 1,
            row.name,
            row.local_time,
            row.offset_label,
            row.location_name
        );
        let mut details = vec![
            if row.available {
                "Available"
            } else {
                "Unavailable"
            }
            .to_string(),
            row.window_label.clone(),
        ];
        if let Some(date) = &row.date_label {
            details.push(date.clone());
        }
        details.push(row.tracking_status.clone());
        let _ = writeln!(out, "    [{}] {}", row.color, details.join(" | "));
    }
    out
}

pub fn render_zones(query: &str) -> String {
    let mut out = String::new();
    for identifier in familytz_tz::search(query) {
        let _ = writeln!(
            out,
            "{:<32} {}",
            identifier,
            familytz_tz::display_name(identifier)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use familytz_engine::ContactColor;
    use familytz_test::{given_dir, utc};

    use super::*;

    fn given_config(dir: &std::path::Path) -> Config {
        let options = Options {
            zone: Some("Europe/London".to_string()),
            at: Some(utc(2024, 1, 15, 13, 30)),
            store: Some(dir.to_path_buf()),
            cities: None,
        };
        Config::resolve(&options, |_| None).unwrap()
    }

    fn names(output: &str) -> Vec<String> {
        output
            .lines()
            .filter(|line| !line.starts_with("    "))
            .map(|line| line[4..28].trim().to_string())
            .collect()
    }

    #[test]
    fn test_config_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_FAMILYTZ_STORE_DIR, "/env/store"),
            (ENV_FAMILYTZ_ZONE, "Asia/Tokyo"),
            (ENV_FAMILYTZ_SUITE, "group.test"),
            (ENV_HOME, "/home/jane"),
        ]);
        let lookup = |key: &str| env.get(key).map(|value| value.to_string());

        let config = Config::resolve(&Options::default(), lookup).unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/env/store"));
        assert_eq!(config.reference_zone.name(), "Asia/Tokyo");
        assert_eq!(config.suite, "group.test");

        let options = Options {
            zone: Some("UTC".to_string()),
            store: Some(PathBuf::from("/flag/store")),
            ..Options::default()
        };
        let config = Config::resolve(&options, lookup).unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/flag/store"));
        assert_eq!(config.reference_zone.name(), "UTC");

        let config = Config::resolve(&Options::default(), |key: &str| {
            (key == ENV_HOME).then(|| "/home/jane".to_string())
        })
        .unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/home/jane/.familytz"));
        assert_eq!(config.suite, APP_GROUP);
    }

    #[test]
    fn test_config_rejects_unknown_zone() {
        let options = Options {
            zone: Some("Mars/Olympus".to_string()),
            ..Options::default()
        };
        assert!(matches!(
            Config::resolve(&options, |_| None),
            Err(CliError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_list_seeds_samples() {
        let dir = given_dir();
        let output = run(Command::List, &given_config(&dir)).unwrap();

        assert_eq!(names(&output), ["Jane (New York)", "John (London)", "Akira (Tokyo)"]);
        assert!(output.contains(" 8:30 AM   -5:00  New York (Eastern)"));
        assert!(output.contains("[red] Unavailable | 8:00 AM - 10:00 PM | Manual time zone"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_add_remove_move() {
        let dir = given_dir();
        let config = given_config(&dir);

        let output = run(
            Command::Add {
                name: "Grandma".to_string(),
                zone: "Australia/Adelaide".to_string(),
                color: ContactColor::Purple,
                window: None,
            },
            &config,
        )
        .unwrap();
        assert_eq!(names(&output).len(), 4);
        assert!(output.contains("[purple] Available | Always available"));

        let output = run(Command::Move { from: 4, to: 1 }, &config).unwrap();
        assert_eq!(
            names(&output),
            ["Grandma", "Jane (New York)", "John (London)", "Akira (Tokyo)"]
        );

        let output = run(Command::Move { from: 1, to: 3 }, &config).unwrap();
        assert_eq!(
            names(&output),
            ["Jane (New York)", "John (London)", "Grandma", "Akira (Tokyo)"]
        );

        let output = run(Command::Remove { index: 2 }, &config).unwrap();
        assert_eq!(
            names(&output),
            ["Jane (New York)", "Grandma", "Akira (Tokyo)"]
        );

        assert!(matches!(
            run(Command::Remove { index: 9 }, &config),
            Err(CliError::IndexOutOfRange(9))
        ));
        assert!(matches!(
            run(Command::Move { from: 1, to: 9 }, &config),
            Err(CliError::IndexOutOfRange(9))
        ));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_add_by_city() {
        let dir = given_dir();
        let cities = dir.join("cities_timezones.yaml");
        fs::write(&cities, "Salt Lake City: America/Denver\nAtlantis: Ocean/Deep\n").unwrap();
        let mut config = given_config(&dir);
        config.cities = Some(cities);

        let add = |zone: &str| Command::Add {
            name: "Uncle".to_string(),
            zone: zone.to_string(),
            color: ContactColor::Gray,
            window: Some((540, 1020)),
        };

        let output = run(add("salt lake city"), &config).unwrap();
        assert!(output.contains("Denver/Salt Lake (Mountain)"));
        assert!(matches!(
            run(add("Atlantis"), &config),
            Err(CliError::UnknownZone(_))
        ));
        assert!(matches!(
            run(add("Nowhere"), &config),
            Err(CliError::UnknownZone(_))
        ));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_render_zones() {
        let output = render_zones("west coast");
        assert_eq!(
            output,
            format!("{:<32} Pacific Time (Los Angeles, Portland)\n", "America/Los_Angeles")
        );
        assert!(render_zones("").lines().count() > 300);
    }
}
