//! ArgMatches → Options + CliAction conversion.

use clap::ArgMatches;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::commands::DEFAULT_INDEX;
use crate::format::OutputMode;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub index: PathBuf,
    pub catalog: PathBuf,
    pub output: OutputMode,
    pub log_level: Level,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Index {
        dir: PathBuf,
        ext: String,
        strict: bool,
    },
    Search {
        query: String,
    },
    Stats,
    Verify,
}

/// Default catalog location: the index path with `.catalog.json` appended.
pub fn default_catalog(index: &Path) -> PathBuf {
    let mut name: OsString = index.as_os_str().to_owned();
    name.push(".catalog.json");
    PathBuf::from(name)
}

pub fn matches_to_action(matches: &ArgMatches) -> Result<(Options, CliAction), String> {
    let index = matches
        .get_one::<String>("index")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX));
    let catalog = matches
        .get_one::<String>("catalog")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_catalog(&index));

    let output = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let log_level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else if matches.get_flag("quiet") {
        Level::WARN
    } else {
        Level::INFO
    };

    let action = match matches.subcommand() {
        Some(("index", sub)) => CliAction::Index {
            dir: sub
                .get_one::<String>("dir")
                .map(PathBuf::from)
                .ok_or("index requires a directory")?,
            ext: sub
                .get_one::<String>("ext")
                .map(|e| e.trim_start_matches('.').to_string())
                .unwrap_or_else(|| "txt".to_string()),
            strict: sub.get_flag("strict"),
        },
        Some(("search", sub)) => {
            let words: Vec<&str> = sub
                .get_many::<String>("query")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            CliAction::Search {
                query: words.join(" "),
            }
        }
        Some(("stats", _)) => CliAction::Stats,
        Some(("verify", _)) => CliAction::Verify,
        Some((other, _)) => return Err(format!("unknown command '{}'", other)),
        None => return Err("no command given".to_string()),
    };

    Ok((
        Options {
            index,
            catalog,
            output,
            log_level,
        },
        action,
    ))
}
