// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use familytz_engine::ContactColor;
use familytz_storage::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("invalid position: {0}")]
    InvalidIndex(String),
    #[error("no contact at position {0}")]
    IndexOutOfRange(usize),
    #[error("invalid window {0:?}, expected HH:MM-HH:MM")]
    InvalidWindow(String),
    #[error("invalid instant {0:?}, expected RFC 3339")]
    InvalidInstant(String),
    #[error("unknown time zone or city: {0}")]
    UnknownZone(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Zones {
        query: String,
    },
    Add {
        name: String,
        zone: String,
        color: ContactColor,
        window: Option<(u16, u16)>,
    },
    /// One based position.
    Remove {
        index: usize,
    },
    /// One based positions; the contact at `from` ends up at `to`.
    Move {
        from: usize,
        to: usize,
    },
    Version,
    Help,
}

/// Flags that apply to every command. Unset flags fall back to the
/// environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub zone: Option<String>,
    pub at: Option<DateTime<Utc>>,
    pub store: Option<PathBuf>,
    pub cities: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
    pub options: Options,
}

/// Parse the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut color = None;
    let mut window = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--version" => return Ok(Args::new(Command::Version, options)),
            "-h" | "--help" => return Ok(Args::new(Command::Help, options)),
            "--zone" => options.zone = Some(value(&mut args, "--zone")?),
            "--at" => options.at = Some(parse_instant(&value(&mut args, "--at")?)?),
            "--store" => options.store = Some(value(&mut args, "--store")?.into()),
            "--cities" => options.cities = Some(value(&mut args, "--cities")?.into()),
            "--color" => color = Some(ContactColor::from_name(&value(&mut args, "--color")?)),
            "--window" => window = Some(parse_window(&value(&mut args, "--window")?)?),
            flag if flag.starts_with('-') && flag.len() > 1 && !is_number(flag) => {
                return Err(CliError::UnknownOption(flag.to_string()))
            },
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None | Some("list") => Command::List,
        Some("zones") => Command::Zones {
            query: positional.by_ref().collect::<Vec<_>>().join(" "),
        },
        Some("add") => Command::Add {
            name: positional.next().ok_or(CliError::MissingArgument("<name>"))?,
            zone: positional.next().ok_or(CliError::MissingArgument("<zone>"))?,
            color: color.unwrap_or_default(),
            window,
        },
        Some("remove") => Command::Remove {
            index: parse_index(positional.next(), "<index>")?,
        },
        Some("move") => Command::Move {
            from: parse_index(positional.next(), "<from>")?,
            to: parse_index(positional.next(), "<to>")?,
        },
        Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }
    Ok(Args::new(command, options))
}

impl Args {
    fn new(command: Command, options: Options) -> Self {
        Self { command, options }
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, CliError> {
    args.next().ok_or(CliError::MissingArgument(flag))
}

fn is_number(arg: &str) -> bool {
    arg.parse::<i64>().is_ok()
}

fn parse_index(arg: Option<String>, name: &'static str) -> Result<usize, CliError> {
    let arg = arg.ok_or(CliError::MissingArgument(name))?;
    match arg.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(CliError::InvalidIndex(arg)),
    }
}

pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| CliError::InvalidInstant(value.to_string()))
}

/// Parse `HH:MM-HH:MM` (24 hour clock) into minutes since midnight.
pub fn parse_window(value: &str) -> Result<(u16, u16), CliError> {
    let invalid = || CliError::InvalidWindow(value.to_string());
    let (start, end) = value.split_once('-').ok_or_else(invalid)?;
    let start = parse_clock(start).ok_or_else(invalid)?;
    let end = parse_clock(end).ok_or_else(invalid)?;
    Ok((start, end))
}

fn parse_clock(value: &str) -> Option<u16> {
    let (hours, minutes) = value.trim().split_once(':')?;
    if minutes.len() != 2 {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}
