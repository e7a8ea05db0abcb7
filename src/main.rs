// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

mod app;
mod cli;
mod environment;
mod minimal_tracer;

use std::{env, error::Error, process::exit, time::Instant};

use minimal_tracer::MinimalTracer;
use tracing::trace;

use crate::{
    app::{run, Config},
    cli::{parse_args, Command},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let now = Instant::now();

    MinimalTracer::register()?;
    trace!("Started familytz");

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            usage();
            exit(2);
        },
    };

    match args.command {
        Command::Version => print_version(),
        Command::Help => usage(),
        command => {
            let config = Config::resolve(&args.options, |key| env::var(key).ok())?;
            trace!("Resolved config in {}us", now.elapsed().as_micros());
            match run(command, &config) {
                Ok(output) => print!("{output}"),
                Err(error) => {
                    eprintln!("{error}");
                    exit(1);
                },
            }
        },
    }

    trace!("Done in {}ms", now.elapsed().as_millis());
    Ok(())
}

fn print_version() {
    println!("familytz {}", VERSION);
}

fn usage() {
    print_version();
    println!(
        r#"

Usage:
  familytz [list]
  familytz zones [query]
  familytz add <name> <zone|city> [--color <color>] [--window HH:MM-HH:MM]
  familytz remove <index>
  familytz move <from> <to>
  familytz -v | --version
  familytz -h | --help

Options:
  -v, --version     Print version information
  -h, --help        Print this help message
  --zone <tz>       Reference time zone (default: $FAMILYTZ_ZONE or the system zone)
  --at <rfc3339>    Evaluate at this instant instead of now
  --store <dir>     Storage directory (default: $FAMILYTZ_STORE_DIR or ~/.familytz)
  --cities <file>   "City: Zone" lines used to resolve city names (default: $FAMILYTZ_CITIES)
  --color <color>   blue, green, red, purple, orange, pink, yellow or gray
  --window <range>  Daily availability in the contact's local time, e.g. 08:00-22:00

Logging is controlled by FAMILYTZ_LOG (or RUST_LOG), e.g. FAMILYTZ_LOG=familytz_storage=debug
"#
    );
}
