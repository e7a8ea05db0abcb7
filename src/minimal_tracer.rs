// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{
    env,
    fmt::{self, Write},
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::{field::Visit, Id, Level, Subscriber};
use tracing_core::Field;

use crate::environment::{ENV_FAMILYTZ_LOG, ENV_RUST_LOG};

pub struct StringVisitor<'a> {
    string: &'a mut String,
}

impl<'a> StringVisitor<'a> {
    pub(crate) fn new(string: &'a mut String) -> Self {
        StringVisitor { string }
    }
}

impl Visit for StringVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = if field.name() == "message" {
            write!(self.string, "{value:?} ")
        } else {
            write!(self.string, "{} = {:?}; ", field.name(), value)
        };
    }
}

#[derive(Debug, PartialEq)]
struct LogFilter {
    target: Option<String>,
    /// Most verbose level let through.
    level: Option<Level>,
}

/// Writes events to stderr, filtered by `FAMILYTZ_LOG` (or `RUST_LOG`).
///
/// The filter is a comma separated list of `level`, `target` or
/// `target=level` entries; an event passes when any entry matches. Logging is
/// off when neither variable is set.
pub struct MinimalTracer {
    enabled: bool,
    filters: Vec<LogFilter>,
}

fn string_to_level(string: &str) -> Option<Level> {
    match string.trim().to_lowercase().as_str() {
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "warn" | "warning" => Some(Level::WARN),
        "trace" => Some(Level::TRACE),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn parse_filters(value: &str) -> Vec<LogFilter> {
    value
        .split(',')
        .map(str::trim)
        .filter(|filter| !filter.is_empty())
        .map(|filter| match filter.split_once('=') {
            Some((target, level)) => LogFilter {
                target: Some(target.to_string()),
                level: string_to_level(level),
            },
            None => match string_to_level(filter) {
                Some(level) => LogFilter {
                    target: None,
                    level: Some(level),
                },
                None => LogFilter {
                    target: Some(filter.to_string()),
                    level: None,
                },
            },
        })
        .collect()
}

impl MinimalTracer {
    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(value) => MinimalTracer {
                enabled: true,
                filters: parse_filters(&value),
            },
            None => MinimalTracer {
                enabled: false,
                filters: Vec::new(),
            },
        }
    }

    pub fn register() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let value = env::var(ENV_FAMILYTZ_LOG)
            .or_else(|_| env::var(ENV_RUST_LOG))
            .ok();
        tracing::subscriber::set_global_default(Self::from_env_value(value))
    }

    fn allows(&self, level: &Level, target: &str) -> bool {
        if !self.enabled {
            return false;
        }
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().any(|filter| {
            // Level::TRACE is the greatest level, so "<=" means "at most this verbose"
            let level_matches = filter.level.map_or(true, |max| *level <= max);
            let target_matches = filter
                .target
                .as_deref()
                .map_or(true, |prefix| target.starts_with(prefix));
            level_matches && target_matches
        })
    }
}

static AUTO_ID: AtomicUsize = AtomicUsize::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        self.allows(metadata.level(), metadata.target())
    }

    fn new_span(&self, _span: &tracing_core::span::Attributes<'_>) -> tracing_core::span::Id {
        Id::from_u64(AUTO_ID.fetch_add(1, Ordering::Relaxed) as u64)
    }

    fn record(&self, _span: &tracing_core::span::Id, _values: &tracing_core::span::Record<'_>) {}

    fn record_follows_from(
        &self,
        _span: &tracing_core::span::Id,
        _follows: &tracing_core::span::Id,
    ) {
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let metadata = event.metadata();

        let mut text = String::new();
        event.record(&mut StringVisitor::new(&mut text));

        eprintln!("{} {}: {}", metadata.level(), metadata.target(), text);
    }

    fn enter(&self, _span: &tracing_core::span::Id) {}

    fn exit(&self, _span: &tracing_core::span::Id) {}
}
