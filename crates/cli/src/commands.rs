//! clap command tree.

use clap::{Arg, ArgAction, Command};

/// Default index file, relative to the working directory.
pub const DEFAULT_INDEX: &str = "vortex.index";

/// Build the top-level `vortex` command.
pub fn build_cli() -> Command {
    Command::new("vortex")
        .about("Index text files and search them by keyword")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("index")
                .long("index")
                .short('i')
                .global(true)
                .value_name("PATH")
                .default_value(DEFAULT_INDEX)
                .help("Index file"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_name("PATH")
                .help("Document catalog file [default: <index>.catalog.json]"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .help("Log at debug level"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log warnings only"),
        )
        .subcommand(
            Command::new("index")
                .about("Index every matching file under a directory")
                .arg(
                    Arg::new("dir")
                        .required(true)
                        .value_name("DIR")
                        .help("Directory to scan recursively"),
                )
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .value_name("EXT")
                        .default_value("txt")
                        .help("File extension to index"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("fsync the index and catalog when saving"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search the index")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .num_args(1..)
                        .value_name("TERMS")
                        .help("Query terms; documents matching any term are returned"),
                ),
        )
        .subcommand(Command::new("stats").about("Show index counts"))
        .subcommand(Command::new("verify").about("Check that the index file loads"))
}
