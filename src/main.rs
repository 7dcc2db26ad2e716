// Copyright 2016 The xi-editor Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use log::{error, info, LevelFilter};
use xi_linebreak::unicode_version;

mod annotate;
mod config;
mod error;
mod linewrap;

use crate::annotate::{annotate, classes, records};
use crate::config::{Config, Mode};
use crate::error::Error;
use crate::linewrap::linewrap;

const USAGE: &str = "\
usage: xi-lb [--mode annotate|json|classes|wrap] [--width N] [--config PATH] [FILE]
       xi-lb --version

Reads FILE, or stdin if FILE is absent or '-', and reports where lines may
be broken. The log level is taken from XI_LOG, else from the config file.";

#[derive(Debug, Default, PartialEq)]
struct Args {
    mode: Option<Mode>,
    width: Option<usize>,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    version: bool,
    help: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args, Error> {
        let mut result = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => result.mode = Some(option_value(&mut args, &arg)?.parse()?),
                "--width" => {
                    let value = option_value(&mut args, &arg)?;
                    let width = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&w| w > 0)
                        .ok_or_else(|| Error::Usage(format!("invalid width {:?}", value)))?;
                    result.width = Some(width);
                }
                "--config" => result.config = Some(option_value(&mut args, &arg)?.into()),
                "--version" | "-V" => result.version = true,
                "--help" | "-h" => result.help = true,
                "-" => result.file = None,
                s if s.starts_with('-') => {
                    return Err(Error::Usage(format!("unknown option {}", s)));
                }
                _ if result.file.is_some() => {
                    return Err(Error::Usage("only one input file is accepted".into()));
                }
                _ => result.file = Some(PathBuf::from(&arg)),
            }
        }
        Ok(result)
    }
}

fn option_value<I: Iterator<Item = String>>(args: &mut I, name: &str) -> Result<String, Error> {
    args.next().ok_or_else(|| Error::Usage(format!("{} needs a value", name)))
}

fn init_logger(config_level: LevelFilter) -> Result<(), fern::InitError> {
    let level_filter = match std::env::var("XI_LOG") {
        Ok(level) => level.parse().unwrap_or(config_level),
        Err(_) => config_level,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| e.into())
}

fn read_input(file: Option<&Path>) -> Result<String, Error> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<(), Error> {
    let mode = args.mode.unwrap_or(config.mode);
    let width = args.width.unwrap_or(config.width);
    if width == 0 {
        return Err(Error::Usage("width must be positive".into()));
    }
    let text = read_input(args.file.as_ref().map(PathBuf::as_path))?;
    info!("breaking {} bytes, mode {:?}, Unicode {}", text.len(), mode, unicode_version());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        Mode::Annotate => {
            out.write_all(annotate(&text, &config.allow_marker, &config.force_marker).as_bytes())?
        }
        Mode::Json => {
            serde_json::to_writer_pretty(&mut out, &records(&text))?;
            writeln!(out)?;
        }
        Mode::Classes => out.write_all(classes(&text).as_bytes())?,
        Mode::Wrap => {
            for line in linewrap(&text, width) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            process::exit(err.exit_code());
        }
    };
    if args.help {
        println!("{}", USAGE);
        return;
    }
    if args.version {
        println!("xi-lb {} (Unicode {})", env!("CARGO_PKG_VERSION"), unicode_version());
        return;
    }

    let config = Config::load(args.config.as_ref().map(PathBuf::as_path));
    let level = config.as_ref().map(Config::log_level).unwrap_or(LevelFilter::Info);
    if let Err(err) = init_logger(level) {
        eprintln!("failed to start logger: {}", err);
    }

    if let Err(err) = config.and_then(|config| run(&args, &config)) {
        error!("{}", err);
        process::exit(err.exit_code());
    }
}
